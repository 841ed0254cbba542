//! `matchMedia`-driven breakpoint watching.

use widget_runtime::Breakpoint;

use crate::interop;
use crate::interop::MediaWatch;

const BREAKPOINTS: [Breakpoint; 5] = [
    Breakpoint::XSmall,
    Breakpoint::Small,
    Breakpoint::Medium,
    Breakpoint::Large,
    Breakpoint::XLarge,
];

/// Media query string for a responsive breakpoint.
pub fn query_for(breakpoint: Breakpoint) -> &'static str {
    match breakpoint {
        Breakpoint::XSmall => "(max-width: 599px)",
        Breakpoint::Small => "(min-width: 600px) and (max-width: 959px)",
        Breakpoint::Medium => "(min-width: 960px) and (max-width: 1279px)",
        Breakpoint::Large => "(min-width: 1280px) and (max-width: 1919px)",
        Breakpoint::XLarge => "(min-width: 1920px)",
    }
}

/// Watches the viewport and reports every breakpoint change.
///
/// One `matchMedia` listener is registered per breakpoint; a listener only
/// forwards when its query starts matching. Dropping the watcher detaches
/// every listener.
pub struct BreakpointWatcher {
    _watches: Vec<MediaWatch>,
}

impl BreakpointWatcher {
    /// Registers listeners for every breakpoint and reports the current
    /// one immediately when it can be determined.
    ///
    /// # Errors
    ///
    /// Fails when the browser rejects a media query registration.
    pub fn start(handler: impl Fn(Breakpoint) + Clone + 'static) -> Result<Self, String> {
        if let Some(current) = Self::current()? {
            handler(current);
        }
        let mut watches = Vec::with_capacity(BREAKPOINTS.len());
        for breakpoint in BREAKPOINTS {
            let handler = handler.clone();
            let watch = interop::watch_media(
                query_for(breakpoint),
                Box::new(move |matches| {
                    if matches {
                        handler(breakpoint);
                    }
                }),
            )?;
            watches.push(watch);
        }
        Ok(Self { _watches: watches })
    }

    /// Resolves the breakpoint currently matching the viewport, when one
    /// can be determined on this target.
    pub fn current() -> Result<Option<Breakpoint>, String> {
        let queries: Vec<(Breakpoint, &str)> = BREAKPOINTS
            .iter()
            .map(|&breakpoint| (breakpoint, query_for(breakpoint)))
            .collect();
        interop::current_breakpoint(&queries)
    }
}

impl std::fmt::Debug for BreakpointWatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BreakpointWatcher").finish()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn queries_cover_the_viewport_without_overlap() {
        assert_eq!(query_for(Breakpoint::XSmall), "(max-width: 599px)");
        assert_eq!(query_for(Breakpoint::XLarge), "(min-width: 1920px)");
    }

    #[test]
    fn host_target_reports_no_current_breakpoint() {
        assert_eq!(BreakpointWatcher::current(), Ok(None));
    }
}
