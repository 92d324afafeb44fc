//! Template expansion for numeric replies.

use super::Response;
use crate::error::RenderError;

/// One argument substituted into a reply template.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReplyArg<'a> {
    /// Fills a `$s` placeholder.
    Str(&'a [u8]),
    /// Fills a `$I` placeholder.
    Uint(u64),
    /// Fills a `$i` placeholder.
    Int(i64),
}

impl ReplyArg<'_> {
    fn kind(&self) -> &'static str {
        match self {
            ReplyArg::Str(_) => "string",
            ReplyArg::Uint(_) => "unsigned",
            ReplyArg::Int(_) => "signed",
        }
    }
}

impl<'a> From<&'a str> for ReplyArg<'a> {
    fn from(s: &'a str) -> Self {
        ReplyArg::Str(s.as_bytes())
    }
}

impl<'a> From<&'a [u8]> for ReplyArg<'a> {
    fn from(s: &'a [u8]) -> Self {
        ReplyArg::Str(s)
    }
}

impl From<u64> for ReplyArg<'_> {
    fn from(n: u64) -> Self {
        ReplyArg::Uint(n)
    }
}

impl From<i64> for ReplyArg<'_> {
    fn from(n: i64) -> Self {
        ReplyArg::Int(n)
    }
}

impl Response {
    /// Expand this reply's template with `args`.
    ///
    /// Arguments are consumed in order. The count must equal the reply's
    /// `arg_count` and each argument must match its placeholder kind.
    pub fn render(&self, args: &[ReplyArg<'_>]) -> Result<Vec<u8>, RenderError> {
        let info = self.info();
        let code = info.code;
        let template = info.template.ok_or(RenderError::NoTemplate { code })?;
        if args.len() != info.arg_count as usize {
            return Err(RenderError::ArgCount {
                code,
                expected: info.arg_count as usize,
                got: args.len(),
            });
        }

        let mut out = Vec::with_capacity(template.len() + 16);
        let mut next = args.iter().enumerate();
        let mut bytes = template.bytes();
        while let Some(b) = bytes.next() {
            if b != b'$' {
                out.push(b);
                continue;
            }
            let Some(spec) = bytes.next() else {
                out.push(b);
                break;
            };
            let expected = match spec {
                b's' => "string",
                b'I' => "unsigned",
                b'i' => "signed",
                other => {
                    out.push(b);
                    out.push(other);
                    continue;
                }
            };
            // Count was checked above and the table test pins placeholders to it.
            let Some((index, arg)) = next.next() else {
                return Err(RenderError::ArgCount {
                    code,
                    expected: info.arg_count as usize,
                    got: args.len(),
                });
            };
            if arg.kind() != expected {
                return Err(RenderError::ArgKind {
                    code,
                    index,
                    expected,
                });
            }
            match *arg {
                ReplyArg::Str(s) => out.extend_from_slice(s),
                ReplyArg::Uint(n) => out.extend_from_slice(n.to_string().as_bytes()),
                ReplyArg::Int(n) => out.extend_from_slice(n.to_string().as_bytes()),
            }
        }
        Ok(out)
    }
}

/// Frame a reply body as it goes on the wire: `: <code> <body>\r\n`.
///
/// The code is always three digits.
pub fn reply_line(response: Response, body: &[u8]) -> Vec<u8> {
    let mut line = Vec::with_capacity(body.len() + 8);
    line.extend_from_slice(format!(": {:03} ", response.code()).as_bytes());
    line.extend_from_slice(body);
    line.extend_from_slice(b"\r\n");
    line
}
