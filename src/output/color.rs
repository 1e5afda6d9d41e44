//! Scoped terminal color

use std::io::{self, Write};

use termcolor::{Color, ColorSpec, WriteColor};

/// Holds a color attribute on a writer and resets it when dropped.
///
/// Everything written through the guard uses the current spec, so the
/// terminal is left uncolored on every exit path, including early returns
/// with `?`.
pub struct ColorGuard<W: WriteColor> {
    writer: W,
}

impl<W: WriteColor> ColorGuard<W> {
    /// Set `spec` on `writer` and take ownership of it
    pub fn new(mut writer: W, spec: &ColorSpec) -> io::Result<Self> {
        writer.set_color(spec)?;
        Ok(Self { writer })
    }

    /// Switch to another color for subsequent writes
    pub fn set(&mut self, spec: &ColorSpec) -> io::Result<()> {
        self.writer.set_color(spec)
    }

    /// Clear the color for subsequent writes
    pub fn clear(&mut self) -> io::Result<()> {
        self.writer.reset()
    }
}

impl<W: WriteColor> Write for ColorGuard<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writer.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

impl<W: WriteColor> Drop for ColorGuard<W> {
    fn drop(&mut self) {
        // nothing useful to do with a failure while dropping
        let _ = self.writer.reset();
        let _ = self.writer.flush();
    }
}

/// Bold red, for differences and errors
pub fn alert() -> ColorSpec {
    let mut spec = ColorSpec::new();
    spec.set_fg(Some(Color::Red)).set_bold(true);
    spec
}

/// Bold green, for the all-clear message
pub fn success() -> ColorSpec {
    let mut spec = ColorSpec::new();
    spec.set_fg(Some(Color::Green)).set_bold(true);
    spec
}
