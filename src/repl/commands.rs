#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum CommandId {
    Help,
    Clubs,
    Add,
    Remove,
    Rename,
    Set,
    Save,
    Load,
    Reset,
    Club,
    Distance,
    Wind,
    Elevation,
    Lie,
    Conditions,
    Calc,
    Exit,
    Quit,
}

/// What the arguments after the command complete to.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum ArgKind {
    None,
    ClubName,
    Lie,
    WindDirection,
}

pub(crate) struct ReplCommand {
    pub(crate) id: CommandId,
    pub(crate) name: &'static str,
    pub(crate) usage: &'static str,
    pub(crate) description: &'static str,
    pub(crate) aliases: &'static [&'static str],
    pub(crate) completes: ArgKind,
}

pub(crate) const REPL_COMMANDS: &[ReplCommand] = &[
    ReplCommand {
        id: CommandId::Help,
        name: "help",
        usage: "",
        description: "Show this help.",
        aliases: &["?", "-h", "--help"],
        completes: ArgKind::None,
    },
    ReplCommand {
        id: CommandId::Clubs,
        name: "clubs",
        usage: "",
        description: "List the bag with carry distances.",
        aliases: &["list"],
        completes: ArgKind::None,
    },
    ReplCommand {
        id: CommandId::Add,
        name: "add",
        usage: "<name> <yards>",
        description: "Add a club, or update the carry of an existing one.",
        aliases: &[],
        completes: ArgKind::None,
    },
    ReplCommand {
        id: CommandId::Remove,
        name: "remove",
        usage: "<n>",
        description: "Remove club number n.",
        aliases: &["rm"],
        completes: ArgKind::None,
    },
    ReplCommand {
        id: CommandId::Rename,
        name: "rename",
        usage: "<n> <name>",
        description: "Rename club number n.",
        aliases: &[],
        completes: ArgKind::None,
    },
    ReplCommand {
        id: CommandId::Set,
        name: "set",
        usage: "<n> <yards>",
        description: "Set the carry of club number n.",
        aliases: &[],
        completes: ArgKind::None,
    },
    ReplCommand {
        id: CommandId::Save,
        name: "save",
        usage: "",
        description: "Save the bag to disk.",
        aliases: &[],
        completes: ArgKind::None,
    },
    ReplCommand {
        id: CommandId::Load,
        name: "load",
        usage: "",
        description: "Replace the bag with the saved one.",
        aliases: &[],
        completes: ArgKind::None,
    },
    ReplCommand {
        id: CommandId::Reset,
        name: "reset",
        usage: "",
        description: "Replace the bag with the default clubs.",
        aliases: &[],
        completes: ArgKind::None,
    },
    ReplCommand {
        id: CommandId::Club,
        name: "club",
        usage: "<name>",
        description: "Play from this club's carry distance.",
        aliases: &[],
        completes: ArgKind::ClubName,
    },
    ReplCommand {
        id: CommandId::Distance,
        name: "distance",
        usage: "<yards>",
        description: "Play from a raw distance in yards.",
        aliases: &["dist"],
        completes: ArgKind::None,
    },
    ReplCommand {
        id: CommandId::Wind,
        name: "wind",
        usage: "<mph> [N|NE|...|degrees]",
        description: "Set wind speed and, optionally, where it blows from.",
        aliases: &[],
        completes: ArgKind::WindDirection,
    },
    ReplCommand {
        id: CommandId::Elevation,
        name: "elevation",
        usage: "<ft>",
        description: "Set elevation change to the target (uphill positive).",
        aliases: &["elev"],
        completes: ArgKind::None,
    },
    ReplCommand {
        id: CommandId::Lie,
        name: "lie",
        usage: "<lie>",
        description: "Set the lie (fairway, light_rough, rough, ...).",
        aliases: &[],
        completes: ArgKind::Lie,
    },
    ReplCommand {
        id: CommandId::Conditions,
        name: "conditions",
        usage: "",
        description: "Show the current shot setup.",
        aliases: &["show"],
        completes: ArgKind::None,
    },
    ReplCommand {
        id: CommandId::Calc,
        name: "calc",
        usage: "",
        description: "Compute the adjusted distance and suggest a club.",
        aliases: &["go"],
        completes: ArgKind::None,
    },
    ReplCommand {
        id: CommandId::Exit,
        name: "exit",
        usage: "",
        description: "Exit the REPL.",
        aliases: &[],
        completes: ArgKind::None,
    },
    ReplCommand {
        id: CommandId::Quit,
        name: "quit",
        usage: "",
        description: "Exit the REPL.",
        aliases: &[],
        completes: ArgKind::None,
    },
];

pub(crate) fn find_command(name: &str) -> Option<&'static ReplCommand> {
    REPL_COMMANDS
        .iter()
        .find(|command| command.name == name || command.aliases.contains(&name))
}

pub(crate) fn build_repl_help() -> String {
    let mut help = String::from("Commands:");
    for command in REPL_COMMANDS {
        let mut names = if command.aliases.is_empty() {
            command.name.to_string()
        } else {
            let mut parts = Vec::with_capacity(command.aliases.len() + 1);
            parts.push(command.name);
            parts.extend(command.aliases);
            parts.join(", ")
        };
        if !command.usage.is_empty() {
            names.push(' ');
            names.push_str(command.usage);
        }
        help.push_str("\n  ");
        help.push_str(&names);
        let padding = 34usize.saturating_sub(names.len());
        help.push_str(&" ".repeat(padding.max(2)));
        help.push_str(command.description);
    }
    help
}
