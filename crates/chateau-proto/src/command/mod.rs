//! RFC 1459 command table.
//!
//! Every command is listed once with its number of mandatory parameters and
//! its number of optional ones. The table is static: lookups are pure and
//! there is no runtime registration.
//!
//! # Reference
//! - RFC 1459 §4 (mandatory commands) and §5 (optional commands)

/// How many optional parameters a command accepts on top of its minimum.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Optional {
    /// At most this many.
    Bounded(u8),
    /// Any number; the minimum is a floor only (USERHOST, ISON).
    Unbounded,
}

/// Parameter count constraints of a command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Arity {
    /// Mandatory parameters.
    pub min: u8,
    /// Optional parameters.
    pub optional: Optional,
}

impl Arity {
    /// Upper bound on the parameter count, if any.
    #[inline]
    pub fn max(&self) -> Option<usize> {
        match self.optional {
            Optional::Bounded(n) => Some(self.min as usize + n as usize),
            Optional::Unbounded => None,
        }
    }

    /// Whether `count` parameters satisfy this arity.
    #[inline]
    pub fn accepts(&self, count: usize) -> bool {
        count >= self.min as usize && self.max().is_none_or(|max| count <= max)
    }
}

macro_rules! optional {
    (*) => {
        Optional::Unbounded
    };
    ($n:literal) => {
        Optional::Bounded($n)
    };
}

macro_rules! define_commands {
    ($( $section:literal => { $( ($min:literal, $opt:tt, $name:ident) ),* $(,)? } )*) => {
        /// A recognized command, or [`Command::Unknown`].
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
        #[allow(clippy::upper_case_acronyms)]
        #[non_exhaustive]
        pub enum Command {
            /// Any token that is not in the table. The raw text stays in the message.
            #[default]
            Unknown,
            $($(
                #[doc = concat!("`", stringify!($name), "` (RFC 1459 §", $section, ")")]
                $name,
            )*)*
        }

        impl Command {
            /// Every known command, in table order.
            pub const ALL: &'static [Command] = &[$($(Command::$name,)*)*];

            /// Wire name of the command, `None` for [`Command::Unknown`].
            pub fn name(self) -> Option<&'static str> {
                match self {
                    Command::Unknown => None,
                    $($(Command::$name => Some(stringify!($name)),)*)*
                }
            }

            /// Parameter constraints, `None` for [`Command::Unknown`].
            pub fn arity(self) -> Option<Arity> {
                match self {
                    Command::Unknown => None,
                    $($(Command::$name => Some(Arity { min: $min, optional: optional!($opt) }),)*)*
                }
            }
        }
    };
}

define_commands! {
    "4.1" => {
        (1, 0, PASS),
        (1, 1, NICK),
        (4, 0, USER),
        (3, 0, SERVER),
        (2, 0, OPER),
        (0, 1, QUIT),
        (2, 0, SQUIT),
    }
    "4.2" => {
        (1, 1, JOIN),
        (1, 0, PART),
        (2, 3, MODE),
        (1, 1, TOPIC),
        (0, 1, NAMES),
        (0, 2, LIST),
        (2, 0, INVITE),
        (2, 1, KICK),
    }
    "4.3" => {
        (0, 1, VERSION),
        (0, 2, STATS),
        (0, 2, LINKS),
        (0, 1, TIME),
        (1, 2, CONNECT),
        (0, 1, TRACE),
        (0, 1, ADMIN),
        (0, 1, INFO),
    }
    "4.4" => {
        (2, 0, PRIVMSG),
        (2, 0, NOTICE),
    }
    "4.5" => {
        (0, 2, WHO),
        (1, 1, WHOIS),
        (1, 2, WHOWAS),
    }
    "4.6" => {
        (2, 0, KILL),
        (1, 1, PING),
        (1, 1, PONG),
        (1, 0, ERROR),
    }
    "5" => {
        (0, 1, AWAY),
        (0, 0, REHASH),
        (0, 0, RESTART),
        (1, 1, SUMMON),
        (0, 1, USERS),
        (1, 0, WALLOPS),
        (1, *, USERHOST),
        (1, *, ISON),
    }
}

impl Command {
    /// Recognize a command token. Matching is exact and case-sensitive.
    pub fn from_name(name: &[u8]) -> Command {
        Command::ALL
            .iter()
            .copied()
            .find(|cmd| cmd.name().is_some_and(|n| n.as_bytes() == name))
            .unwrap_or(Command::Unknown)
    }

    /// True for anything but [`Command::Unknown`].
    #[inline]
    pub fn is_known(self) -> bool {
        self != Command::Unknown
    }
}

/// Look up the arity of a command by its wire name.
///
/// ```
/// use chateau_proto::{lookup_command_arity, Optional};
///
/// let arity = lookup_command_arity(b"NICK").unwrap();
/// assert_eq!((arity.min, arity.optional), (1, Optional::Bounded(1)));
/// assert!(lookup_command_arity(b"nick").is_none());
/// ```
pub fn lookup_command_arity(name: &[u8]) -> Option<Arity> {
    Command::from_name(name).arity()
}
