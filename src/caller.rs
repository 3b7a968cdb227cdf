//! Caller provenance for log calls
//!
//! A [`CallerContextProvider`] reports the chain of callers that led to a
//! log call as `(file, function, line)` frames, most immediate caller first.
//! [`BacktraceProvider`] walks the native stack; [`FixedProvider`] serves a
//! preset chain for platforms without introspection.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::panic::Location;
use std::path::Path;

/// Symbol path prefix of this module; frames under it belong to the capture itself
const CAPTURE_PATH: &str = concat!(module_path!(), "::");

/// Function name shown when only a source location is known
pub const UNKNOWN_FUNCTION: &str = "?";

/// File name shown when a symbol carries no location
pub const UNKNOWN_FILE: &str = "?";

/// One caller in the chain leading to a log call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallerFrame {
    /// File name without directories
    pub file: String,
    pub function: String,
    pub line: u32,
}

impl CallerFrame {
    pub fn new(file: impl AsRef<str>, function: impl Into<String>, line: u32) -> Self {
        Self {
            file: basename(file.as_ref()),
            function: function.into(),
            line,
        }
    }

    /// Frame for a source location whose enclosing function is unknown
    pub fn from_location(location: &Location<'_>) -> Self {
        Self::new(location.file(), UNKNOWN_FUNCTION, location.line())
    }

    /// Frame for a resolved symbol.
    ///
    /// Binaries without debug info resolve names but not locations. The
    /// most immediate caller then borrows the `#[track_caller]` location and
    /// deeper frames show [`UNKNOWN_FILE`] and line 0.
    fn from_symbol(
        name: &str,
        file: Option<&Path>,
        line: Option<u32>,
        call_site: Option<&Location<'_>>,
    ) -> Self {
        let function = short_function_name(name);
        match (file, line, call_site) {
            (Some(file), Some(line), _) => Self {
                file: basename(&file.to_string_lossy()),
                function,
                line,
            },
            (_, _, Some(location)) => Self::new(location.file(), function, location.line()),
            _ => Self {
                file: UNKNOWN_FILE.to_string(),
                function,
                line: 0,
            },
        }
    }
}

impl fmt::Display for CallerFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "File: {} →  Function: {} →  Line No: {}",
            self.file, self.function, self.line
        )
    }
}

/// Supplies the caller chain at the point of a log call.
pub trait CallerContextProvider: Send + Sync {
    /// Up to `depth` frames, most immediate caller first.
    ///
    /// `call_site` is the location of the log call as seen through
    /// `#[track_caller]`. A shallow stack yields fewer frames, never an error.
    fn capture(&self, depth: usize, call_site: &'static Location<'static>) -> Vec<CallerFrame>;
}

/// Walks the native call stack.
///
/// Leading frames that belong to the stack walk or to the calling facade are
/// skipped, so the first reported frame is the code that invoked the logger.
/// Frames without a symbol name are left out; named frames without a
/// location are kept. When nothing resolves at all (stripped binaries) the
/// `#[track_caller]` location is reported instead.
#[derive(Debug, Clone, Default)]
pub struct BacktraceProvider {
    internal_paths: Vec<&'static str>,
}

impl BacktraceProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Treat frames under `path` (a symbol path prefix such as
    /// `"my_crate::logging::"`) as part of the logging machinery.
    #[must_use]
    pub fn with_internal_path(mut self, path: &'static str) -> Self {
        self.internal_paths.push(path);
        self
    }

    fn is_internal(&self, name: &str) -> bool {
        if name.contains("::tests::") {
            return false;
        }
        name.starts_with("backtrace::")
            || name.contains(CAPTURE_PATH)
            || self.internal_paths.iter().any(|path| name.contains(path))
    }
}

impl CallerContextProvider for BacktraceProvider {
    #[inline(never)]
    fn capture(&self, depth: usize, call_site: &'static Location<'static>) -> Vec<CallerFrame> {
        if depth == 0 {
            return Vec::new();
        }

        let mut frames = Vec::with_capacity(depth);
        let mut in_prologue = true;

        backtrace::trace(|frame| {
            // One physical frame may resolve to several inlined symbols
            backtrace::resolve_frame(frame, |symbol| {
                if frames.len() >= depth {
                    return;
                }
                let Some(name) = symbol.name().map(|n| format!("{:#}", n)) else {
                    return;
                };
                if in_prologue {
                    if self.is_internal(&name) {
                        return;
                    }
                    in_prologue = false;
                }
                let immediate = frames.is_empty().then_some(call_site);
                frames.push(CallerFrame::from_symbol(
                    &name,
                    symbol.filename(),
                    symbol.lineno(),
                    immediate,
                ));
            });
            frames.len() < depth
        });

        if frames.is_empty() {
            frames.push(CallerFrame::from_location(call_site));
        }
        frames
    }
}

/// Serves a preset caller chain, most immediate caller first.
#[derive(Debug, Clone, Default)]
pub struct FixedProvider {
    frames: Vec<CallerFrame>,
}

impl FixedProvider {
    pub fn new(frames: Vec<CallerFrame>) -> Self {
        Self { frames }
    }
}

impl CallerContextProvider for FixedProvider {
    fn capture(&self, depth: usize, _call_site: &'static Location<'static>) -> Vec<CallerFrame> {
        self.frames.iter().take(depth).cloned().collect()
    }
}

fn basename(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string())
}

/// Last meaningful segment of a demangled symbol path.
///
/// Closures keep their parent: `app::main::{{closure}}` → `main::{{closure}}`.
fn short_function_name(path: &str) -> String {
    let mut segments = path.rsplit("::").filter(|s| !s.starts_with('<'));
    match segments.next() {
        Some(last) if last.starts_with("{{") => match segments.next() {
            Some(parent) => format!("{}::{}", parent, last),
            None => last.to_string(),
        },
        Some(last) => last.to_string(),
        None => path.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_display() {
        let frame = CallerFrame::new("/srv/app/src/main.rs", "run", 42);
        assert_eq!(frame.file, "main.rs");
        assert_eq!(
            frame.to_string(),
            "File: main.rs →  Function: run →  Line No: 42"
        );
    }

    #[test]
    fn test_short_function_name() {
        assert_eq!(short_function_name("app::server::run"), "run");
        assert_eq!(short_function_name("app::main::{{closure}}"), "main::{{closure}}");
        assert_eq!(short_function_name("<app::Foo as app::Bar>::call"), "call");
        assert_eq!(short_function_name("app::parse::<u32>"), "parse");
        assert_eq!(short_function_name("main"), "main");
    }

    #[test]
    fn test_fixed_provider_truncates() {
        let provider = FixedProvider::new(vec![
            CallerFrame::new("a.rs", "a", 1),
            CallerFrame::new("b.rs", "b", 2),
        ]);

        assert_eq!(provider.capture(1, Location::caller()).len(), 1);
        assert_eq!(provider.capture(5, Location::caller()).len(), 2);
        assert!(provider.capture(0, Location::caller()).is_empty());
    }

    #[test]
    fn test_internal_detection() {
        let provider = BacktraceProvider::new().with_internal_path("my_app::logging::");

        assert!(provider.is_internal("backtrace::backtrace::trace"));
        assert!(provider.is_internal(&format!("{}BacktraceProvider::capture", CAPTURE_PATH)));
        assert!(provider.is_internal("my_app::logging::wrap"));
        assert!(!provider.is_internal("my_app::handlers::create_user"));
        assert!(!provider.is_internal(&format!("{}tests::helper", CAPTURE_PATH)));
    }

    #[inline(never)]
    fn nested_capture(depth: usize) -> Vec<CallerFrame> {
        BacktraceProvider::new().capture(depth, Location::caller())
    }

    #[test]
    fn test_backtrace_respects_depth() {
        assert!(nested_capture(0).is_empty());

        let frames = nested_capture(2);
        assert!(!frames.is_empty());
        assert!(frames.len() <= 2);
    }

    #[test]
    fn test_symbol_with_location() {
        let frame = CallerFrame::from_symbol(
            "app::jobs::run",
            Some(Path::new("/srv/app/src/jobs.rs")),
            Some(7),
            Some(Location::caller()),
        );
        assert_eq!(frame, CallerFrame::new("jobs.rs", "run", 7));
    }

    #[test]
    fn test_symbol_without_location() {
        let frame = CallerFrame::from_symbol("app::jobs::run", None, None, None);
        assert_eq!(frame.file, UNKNOWN_FILE);
        assert_eq!(frame.function, "run");
        assert_eq!(frame.line, 0);

        let frame = CallerFrame::from_symbol("app::jobs::run", Some(Path::new("jobs.rs")), None, None);
        assert_eq!(frame.file, UNKNOWN_FILE);
    }

    #[test]
    fn test_immediate_symbol_borrows_call_site() {
        let call_site = Location::caller();
        let frame = CallerFrame::from_symbol("app::jobs::run", None, None, Some(call_site));
        assert_eq!(frame.file, "caller.rs");
        assert_eq!(frame.function, "run");
        assert_eq!(frame.line, call_site.line());
    }

    #[test]
    fn test_from_location() {
        let frame = CallerFrame::from_location(Location::caller());
        assert_eq!(frame.file, "caller.rs");
        assert_eq!(frame.function, UNKNOWN_FUNCTION);
    }
}
