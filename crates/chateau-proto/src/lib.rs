//! # chateau-proto
//!
//! RFC1459 protocol pieces used by the `chateaud` gateway:
//!
//! - [`Message`]: one parsed client line, owning its bytes in a single buffer
//! - [`Command`] and [`Response`]: static command arity and numeric reply tables
//! - [`Parser`]: a one-byte-lookahead recognizer over an async byte stream
//!
//! ## Parsing a line
//!
//! ```rust
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! use chateau_proto::{Command, Message, Parsed, Parser};
//!
//! let input: &[u8] = b":nick!user@host PRIVMSG #chan :hello there\r\n";
//! let mut parser = Parser::new(input);
//! let mut msg = Message::new();
//!
//! assert_eq!(parser.parse(&mut msg).await.unwrap(), Parsed::Message);
//! assert_eq!(msg.command(), Command::PRIVMSG);
//! assert_eq!(msg.param(1), Some(&b"hello there"[..]));
//! # }
//! ```
//!
//! ## Rendering a numeric reply
//!
//! ```rust
//! use chateau_proto::{reply_line, Response};
//!
//! let body = Response::ERR_NEEDMOREPARAMS.render(&["PASS".into()]).unwrap();
//! assert_eq!(
//!     reply_line(Response::ERR_NEEDMOREPARAMS, &body),
//!     b": 461 PASS :Not enough parameters\r\n".to_vec()
//! );
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod command;
pub mod error;
pub mod message;
#[cfg(feature = "tokio")]
pub mod parse;
pub mod response;
#[cfg(feature = "tokio")]
pub mod stream;

pub use self::command::{lookup_command_arity, Command, Optional};
pub use self::error::{ParseError, RenderError};
pub use self::message::{Message, Prefix, MAX_PARAMS};
#[cfg(feature = "tokio")]
pub use self::parse::{Parsed, Parser, DEFAULT_MAX_LINE_LEN};
pub use self::response::{lookup_reply, reply_line, ReplyArg, ReplyInfo, Response};
#[cfg(feature = "tokio")]
pub use self::stream::CharStream;
