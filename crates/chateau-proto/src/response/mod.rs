//! RFC 1459 numeric replies.
//!
//! Each reply carries the number of arguments its text template consumes and
//! the template itself. Templates use `$s` for a byte string, `$I` for an
//! unsigned integer and `$i` for a signed integer. A few replies (USERHOST,
//! ISON, NAMREPLY, ...) have a variable shape and no template; callers build
//! those by hand.
//!
//! # Reference
//! - RFC 1459 §6.1 (error replies) and §6.2 (command responses)

#![allow(non_camel_case_types)]

mod render;

use std::fmt;

pub use render::{reply_line, ReplyArg};

/// Static description of one numeric reply.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplyInfo {
    /// Three-digit numeric code.
    pub code: u16,
    /// Number of arguments the template consumes.
    pub arg_count: u8,
    /// Symbolic name, e.g. `ERR_NEEDMOREPARAMS`.
    pub name: &'static str,
    /// Text template, `None` when the reply must be assembled ad hoc.
    pub template: Option<&'static str>,
}

macro_rules! template {
    (_) => {
        None
    };
    ($text:literal) => {
        Some($text)
    };
}

macro_rules! define_responses {
    ($( ($code:literal, $narg:literal, $name:ident, $tpl:tt) ),* $(,)?) => {
        /// Numeric reply code.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        #[repr(u16)]
        #[non_exhaustive]
        pub enum Response {
            $(
                #[doc = concat!(stringify!($code), " - `", stringify!($name), "`")]
                $name = $code,
            )*
        }

        impl Response {
            /// Every reply in table order.
            pub const ALL: &'static [Response] = &[$(Response::$name,)*];

            /// Create a Response from its numeric code.
            pub fn from_code(code: u16) -> Option<Response> {
                match code {
                    $($code => Some(Response::$name),)*
                    _ => None,
                }
            }

            /// Arity, name and template of this reply.
            pub fn info(&self) -> ReplyInfo {
                match self {
                    $(Response::$name => ReplyInfo {
                        code: $code,
                        arg_count: $narg,
                        name: stringify!($name),
                        template: template!($tpl),
                    },)*
                }
            }
        }
    };
}

define_responses! {
    // 6.1 Error replies
    (401, 1, ERR_NOSUCHNICK,        "$s :No such nick/channel"),
    (402, 1, ERR_NOSUCHSERVER,      "$s :No such server"),
    (403, 1, ERR_NOSUCHCHANNEL,     "$s :No such channel"),
    (404, 1, ERR_CANNOTSENDTOCHAN,  "$s :Cannot send to channel"),
    (405, 1, ERR_TOOMANYCHANNELS,   "$s :You have joined too many channels"),
    (406, 1, ERR_WASNOSUCHNICK,     "$s :There was no such nickname"),
    (407, 1, ERR_TOOMANYTARGETS,    "$s :Duplicate recipients. No message delivered"),
    (409, 0, ERR_NOORIGIN,          ":No origin specified"),
    (411, 1, ERR_NORECIPIENT,       ":No recipient given ($s)"),
    (412, 0, ERR_NOTEXTTOSEND,      ":No text to send"),
    (413, 1, ERR_NOTOPLEVEL,        "$s :No toplevel domain specified"),
    (414, 1, ERR_WILDTOPLEVEL,      "$s :Wildcard in toplevel domain"),
    (421, 1, ERR_UNKNOWNCOMMAND,    "$s :Unknown command"),
    (422, 0, ERR_NOMOTD,            ":MOTD File is missing"),
    (423, 1, ERR_NOADMININFO,       "$s :No administrative info available"),
    (424, 2, ERR_FILEERROR,         ":File error doing $s on $s"),
    (431, 0, ERR_NONICKNAMEGIVEN,   ":No nickname given"),
    (432, 1, ERR_ERRONEUSNICKNAME,  "$s :Erroneus nickname"),
    (433, 1, ERR_NICKNAMEINUSE,     "$s :Nickname is already in use"),
    (436, 1, ERR_NICKCOLLISION,     "$s :Nickname collision KILL"),
    (441, 2, ERR_USERNOTINCHANNEL,  "$s $s :They aren't on that channel"),
    (442, 1, ERR_NOTONCHANNEL,      "$s :You're not on that channel"),
    (443, 2, ERR_USERONCHANNEL,     "$s $s :is already on channel"),
    (444, 1, ERR_NOLOGIN,           "$s :User not logged in"),
    (445, 0, ERR_SUMMONDISABLED,    ":SUMMON has been disabled"),
    (446, 0, ERR_USERSDISABLED,     ":USERS has been disabled"),
    (451, 0, ERR_NOTREGISTERED,     ":You have not registered"),
    (461, 1, ERR_NEEDMOREPARAMS,    "$s :Not enough parameters"),
    (462, 0, ERR_ALREADYREGISTRED,  ":You may not reregister"),
    (463, 0, ERR_NOPERMFORHOST,     ":Your host isn't among the privileged"),
    (464, 0, ERR_PASSWDMISMATCH,    ":Password incorrect"),
    (465, 0, ERR_YOUREBANNEDCREEP,  ":You are banned from this server"),
    // RFC 1459 §6.1 numbers this 467. Older tables listing 457 have a typo.
    (467, 1, ERR_KEYSET,            "$s :Channel key already set"),
    (471, 1, ERR_CHANNELISFULL,     "$s :Cannot join channel (+l)"),
    (472, 1, ERR_UNKNOWNMODE,       "$s :is unknown mode char to me"),
    (473, 1, ERR_INVITEONLYCHAN,    "$s :Cannot join channel (+i)"),
    (474, 1, ERR_BANNEDFROMCHAN,    "$s :Cannot join channel (+b)"),
    (475, 1, ERR_BADCHANNELKEY,     "$s :Cannot join channel (+k)"),
    (481, 0, ERR_NOPRIVILEGES,      ":Permission Denied- You're not an IRC operator"),
    (482, 1, ERR_CHANOPRIVSNEEDED,  "$s :You're not channel operator"),
    (483, 0, ERR_CANTKILLSERVER,    ":You cant kill a server!"),
    (491, 0, ERR_NOOPERHOST,        ":No O-lines for your host"),
    (501, 0, ERR_UMODEUNKNOWNFLAG,  ":Unknown MODE flag"),
    (502, 0, ERR_USERSDONTMATCH,    ":Cant change mode for other users"),

    // 6.2 Command responses
    (300, 0, RPL_NONE,              ""),
    (302, 0, RPL_USERHOST,          _),
    (303, 0, RPL_ISON,              _),
    (301, 2, RPL_AWAY,              "$s :$s"),
    (305, 0, RPL_UNAWAY,            ":You are no longer marked as being away"),
    (306, 0, RPL_NOWAWAY,           ":You have been marked as being away"),
    (311, 4, RPL_WHOISUSER,         "$s $s $s * :$s"),
    (312, 3, RPL_WHOISSERVER,       "$s $s :$s"),
    (313, 1, RPL_WHOISOPERATOR,     "$s :is an IRC operator"),
    (317, 2, RPL_WHOISIDLE,         "$s $I :seconds idle"),
    (318, 1, RPL_ENDOFWHOIS,        "$s :End of /WHOIS list"),
    (319, 0, RPL_WHOISCHANNELS,     _),
    (314, 4, RPL_WHOWASUSER,        "$s $s $s * :$s"),
    (369, 1, RPL_ENDOFWHOWAS,       "$s :End of WHOWAS"),
    (321, 0, RPL_LISTSTART,         "Channel :Users  Name"),
    (322, 3, RPL_LIST,              "$s $I :$s"),
    (323, 0, RPL_LISTEND,           ":End of /LIST"),
    (324, 3, RPL_CHANNELMODEIS,     "$s $s $s"),
    (331, 1, RPL_NOTOPIC,           "$s :No topic is set"),
    (332, 2, RPL_TOPIC,             "$s :$s"),
    (341, 2, RPL_INVITING,          "$s $s"),
    (342, 1, RPL_SUMMONING,         "$s :Summoning user to IRC"),
    (351, 4, RPL_VERSION,           "$s.$s $s :$s"),
    (352, 8, RPL_WHOREPLY,          "$s $s $s $s $s $s :$I $s"),
    (315, 1, RPL_ENDOFWHO,          "$s :End of /WHO list"),
    (353, 0, RPL_NAMREPLY,          _),
    (366, 1, RPL_ENDOFNAMES,        "$s :End of /NAMES list"),
    (364, 4, RPL_LINKS,             "$s $s :$I $s"),
    (365, 1, RPL_ENDOFLINKS,        "$s :End of /LINKS list"),
    (367, 2, RPL_BANLIST,           "$s $s"),
    (368, 1, RPL_ENDOFBANLIST,      "$s :End of channel ban list"),
    (371, 1, RPL_INFO,              ":$s"),
    (374, 0, RPL_ENDOFINFO,         ":End of /INFO list"),
    (375, 1, RPL_MOTDSTART,         ":- $s Message of the day - "),
    (372, 1, RPL_MOTD,              ":- $s"),
    (376, 0, RPL_ENDOFMOTD,         ":End of /MOTD command"),
    (381, 0, RPL_YOUREOPER,         ":You are now an IRC operator"),
    (382, 1, RPL_REHASHING,         "$s :Rehashing"),
    (391, 0, RPL_TIME,              _),
    (392, 0, RPL_USERSSTART,        ":UserID   Terminal  Host"),
    (393, 0, RPL_USERS,             _),
    (394, 0, RPL_ENDOFUSERS,        ":End of users"),
    (395, 0, RPL_NOUSERS,           ":Nobody logged in"),
    (200, 3, RPL_TRACELINK,         "Link $s $s $s"),
    (201, 2, RPL_TRACECONNECTING,   "Try. $s $s"),
    (202, 2, RPL_TRACEHANDSHAKE,    "H.S. $s $s"),
    (203, 2, RPL_TRACEUNKNOWN,      "???? $s $s"),
    (204, 2, RPL_TRACEOPERATOR,     "Oper $s $s"),
    (205, 2, RPL_TRACEUSER,         "User $s $s"),
    (206, 5, RPL_TRACESERVER,       "Serv $s $iS $iC $s $s"),
    (208, 2, RPL_TRACENEWTYPE,      "$s 0 $s"),
    (261, 2, RPL_TRACELOG,          "File $s $s"),
    (211, 7, RPL_STATSLINKINFO,     "$s $I $I $I $I $I $I"),
    (212, 2, RPL_STATSCOMMANDS,     "$s $I"),
    (213, 4, RPL_STATSCLINE,        "C $s * $s $I $s"),
    (214, 4, RPL_STATSNLINE,        "N $s * $s $I $s"),
    (215, 4, RPL_STATSILINE,        "I $s * $s $I $s"),
    (216, 4, RPL_STATSKLINE,        "K $s * $s $I $s"),
    (218, 4, RPL_STATSYLINE,        "Y $s $I $I $I"),
    (219, 1, RPL_ENDOFSTATS,        "$s :End of /STATS report"),
    (241, 3, RPL_STATSLLINE,        "L $s * $s $I"),
    (242, 0, RPL_STATSUPTIME,       _),
    (243, 2, RPL_STATSOLINE,        "O $s * $s"),
    (244, 2, RPL_STATSHLINE,        "H $s * $s"),
    (221, 1, RPL_UMODEIS,           "$s"),
    (251, 3, RPL_LUSERCLIENT,       ":There are $I users and $I invisible on $I servers"),
    (252, 1, RPL_LUSEROP,           "$I :operator(s) online"),
    (253, 1, RPL_LUSERUNKNOWN,      "$I :unknown connection(s)"),
    (254, 1, RPL_LUSERCHANNELS,     "$I :channels formed"),
    (255, 2, RPL_LUSERME,           ":I have $I clients and $I servers"),
    (256, 1, RPL_ADMINME,           "$s :Administrative info"),
    (257, 1, RPL_ADMINLOC1,         ":$s"),
    (258, 1, RPL_ADMINLOC2,         ":$s"),
    (259, 1, RPL_ADMINEMAIL,        ":$s"),
}

impl Response {
    /// Returns the numeric code as u16
    #[inline]
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is an error reply (4xx, 5xx)
    #[inline]
    pub fn is_error(&self) -> bool {
        (400..600).contains(&self.code())
    }

    /// Whether [`Response::render`] can build this reply.
    #[inline]
    pub fn has_template(&self) -> bool {
        self.info().template.is_some()
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:03}", self.code())
    }
}

/// Look up a numeric reply by code.
///
/// ```
/// use chateau_proto::lookup_reply;
///
/// let info = lookup_reply(461).unwrap();
/// assert_eq!(info.name, "ERR_NEEDMOREPARAMS");
/// assert_eq!(info.arg_count, 1);
/// assert!(lookup_reply(999).is_none());
/// ```
pub fn lookup_reply(code: u16) -> Option<ReplyInfo> {
    Response::from_code(code).map(|r| r.info())
}
