//! Property-based tests for line parsing.
//!
//! Generates well-formed lines from random components and checks that the
//! parser hands back exactly those components, and that arbitrary bytes never
//! make it panic.

use chateau_proto::{Command, Message, ParseError, Parsed, Parser, DEFAULT_MAX_LINE_LEN, MAX_PARAMS};
use proptest::prelude::*;

// =============================================================================
// STRATEGIES
// =============================================================================

fn nickname_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z\\[\\]\\\\^_`{|}][a-zA-Z0-9\\-\\[\\]\\\\^_`{|}]{0,8}")
        .expect("valid regex")
}

fn username_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z~][a-zA-Z0-9]{0,9}").expect("valid regex")
}

fn hostname_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z0-9]{1,12}(\\.[a-z0-9]{1,12}){0,3}").expect("valid regex")
}

fn command_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(Command::ALL).prop_map(|cmd| cmd.name().expect("known command"))
}

/// A middle parameter: non-empty, no space, no leading colon.
fn middle_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[^\r\n\0 :][^\r\n\0 ]{0,20}").expect("valid regex")
}

/// Trailing text: anything but line terminators.
fn trailing_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[^\r\n\0]{0,200}").expect("valid regex")
}

fn parse_all(input: &[u8]) -> Vec<Result<Parsed, String>> {
    let rt = tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("runtime");
    rt.block_on(async {
        let mut parser = Parser::new(input);
        let mut msg = Message::new();
        let mut outcomes = Vec::new();
        loop {
            msg.reset();
            match parser.parse(&mut msg).await {
                Ok(Parsed::Message) => outcomes.push(Ok(Parsed::Message)),
                Ok(Parsed::EndOfInput) => {
                    outcomes.push(Ok(Parsed::EndOfInput));
                    break;
                }
                Err(e) => {
                    outcomes.push(Err(e.error_code().to_string()));
                    break;
                }
            }
        }
        outcomes
    })
}

fn parse_line(line: &str) -> (Result<Parsed, ParseError>, Message) {
    parse_line_capped(line, DEFAULT_MAX_LINE_LEN)
}

/// Parse `line` with no practical length cap, so generated lines of any size
/// exercise the grammar alone.
fn parse_line_uncapped(line: &str) -> (Result<Parsed, ParseError>, Message) {
    parse_line_capped(line, usize::MAX)
}

fn parse_line_capped(line: &str, max_line_len: usize) -> (Result<Parsed, ParseError>, Message) {
    let rt = tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("runtime");
    rt.block_on(async {
        let mut parser = Parser::with_max_line_len(line.as_bytes(), max_line_len);
        let mut msg = Message::new();
        let res = parser.parse(&mut msg).await;
        (res, msg)
    })
}

// =============================================================================
// PROPERTIES
// =============================================================================

proptest! {
    #[test]
    fn well_formed_line_recovers_components(
        nick in nickname_strategy(),
        user in username_strategy(),
        host in hostname_strategy(),
        command in command_strategy(),
        middles in prop::collection::vec(middle_strategy(), 0..MAX_PARAMS),
        trailing in trailing_strategy(),
    ) {
        let mut line = format!(":{}!{}@{} {}", nick, user, host, command);
        for m in &middles {
            line.push(' ');
            line.push_str(m);
        }
        line.push_str(" :");
        line.push_str(&trailing);
        line.push_str("\r\n");

        let (res, msg) = parse_line_uncapped(&line);
        prop_assert_eq!(res.unwrap(), Parsed::Message);

        let prefix = msg.prefix().unwrap();
        prop_assert_eq!(prefix.nick, nick.as_bytes());
        prop_assert_eq!(prefix.user, Some(user.as_bytes()));
        prop_assert_eq!(prefix.host, Some(host.as_bytes()));
        prop_assert_eq!(msg.command_text(), command.as_bytes());
        prop_assert!(msg.command().is_known());

        let got: Vec<&[u8]> = msg.params().collect();
        let mut want: Vec<&[u8]> = middles.iter().map(|m| m.as_bytes()).collect();
        want.push(trailing.as_bytes());
        prop_assert_eq!(got, want);
    }

    #[test]
    fn line_over_cap_is_too_long(
        cap in 16usize..600,
        over in 1usize..64,
        trailing_terminator in any::<bool>(),
    ) {
        // "PRIVMSG #c :" plus filler brings the content to cap + over bytes.
        let head = "PRIVMSG #c :";
        let mut line = head.to_string();
        line.push_str(&"x".repeat(cap + over - head.len()));
        if trailing_terminator {
            line.push_str("\r\n");
        }
        let (res, _) = parse_line_capped(&line, cap);
        let too_long = matches!(res, Err(ParseError::TooLong { limit }) if limit == cap);
        prop_assert!(too_long);
    }

    #[test]
    fn line_within_cap_is_accepted(cap in 16usize..600, under in 0usize..4) {
        let head = "PRIVMSG #c :";
        let mut line = head.to_string();
        line.push_str(&"x".repeat(cap - under - head.len()));
        line.push_str("\r\n");
        let (res, _) = parse_line_capped(&line, cap);
        prop_assert_eq!(res.unwrap(), Parsed::Message);
    }

    #[test]
    fn too_many_params_is_rejected(extra in 1usize..8) {
        let line = format!("ISON{}\r\n", " n".repeat(MAX_PARAMS + extra));
        let (res, _) = parse_line(&line);
        let rejected = matches!(res, Err(ParseError::TooManyParams { .. }));
        prop_assert!(rejected);
    }

    #[test]
    fn arbitrary_bytes_never_panic(input in prop::collection::vec(any::<u8>(), 0..600)) {
        let outcomes = parse_all(&input);
        prop_assert!(!outcomes.is_empty());
    }

    #[test]
    fn unterminated_line_is_end_of_input(
        command in command_strategy(),
        middles in prop::collection::vec(middle_strategy(), 0..4),
    ) {
        let mut line = command.to_string();
        for m in &middles {
            line.push(' ');
            line.push_str(m);
        }
        let (res, _) = parse_line(&line);
        prop_assert_eq!(res.unwrap(), Parsed::EndOfInput);
    }
}
