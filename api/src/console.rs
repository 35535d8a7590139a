use std::ffi::OsStr;
use std::fmt::Display;
use std::io::{self, Write};

const RESET: &str = "\x1b[0m";
const BANNER: &str = "\x1b[1;36m";
const SUB: &str = "\x1b[1;33m";
const KEY: &str = "\x1b[1;37m";
const DIM: &str = "\x1b[2;37m";

/// Whether to color the output: colors are on unless `--no-color` was given or
/// `NO_COLOR` is set to a non-empty value.
pub fn color_enabled(no_color_flag: bool, no_color_env: Option<&OsStr>) -> bool {
    let env_disables = no_color_env.map(|v| !v.is_empty()).unwrap_or(false);
    !no_color_flag && !env_disables
}

/// Section headers, key/value lines and indexed lists on a writer.
pub struct Console<W: Write> {
    out: W,
    color: bool,
}

impl<W: Write> Console<W> {
    /// A console writing to `out`.
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    /// Give back the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn paint(&self, code: &'static str) -> &'static str {
        if self.color {
            code
        } else {
            ""
        }
    }

    /// A horizontal rule.
    pub fn hr(&mut self) -> io::Result<()> {
        writeln!(
            self.out,
            "{}{}{}",
            self.paint(DIM),
            "─".repeat(56),
            self.paint(RESET)
        )
    }

    /// A section header followed by a rule.
    pub fn banner(&mut self, title: &str) -> io::Result<()> {
        writeln!(
            self.out,
            "\n{}== {} =={}",
            self.paint(BANNER),
            title,
            self.paint(RESET)
        )?;
        self.hr()
    }

    /// A subsection header.
    pub fn sub(&mut self, title: &str) -> io::Result<()> {
        writeln!(
            self.out,
            "{}-- {} --{}",
            self.paint(SUB),
            title,
            self.paint(RESET)
        )
    }

    /// `key : value` with the key padded to a column.
    pub fn kv<V: Display>(&mut self, key: &str, value: V) -> io::Result<()> {
        writeln!(
            self.out,
            "{}{:<18}{} : {}",
            self.paint(KEY),
            key,
            self.paint(RESET),
            value
        )
    }

    /// An optional title, then one `[i] = value` line per item.
    pub fn list<V: Display>(&mut self, title: &str, items: &[V]) -> io::Result<()> {
        if !title.is_empty() {
            writeln!(self.out, "{}{}{}", self.paint(SUB), title, self.paint(RESET))?;
        }
        for (i, item) in items.iter().enumerate() {
            writeln!(self.out, "  [{}] = {}", i, item)?;
        }
        Ok(())
    }
}
