use std::sync::OnceLock;

static DEBUG_HOOK: OnceLock<fn(&str)> = OnceLock::new();

/// Installs a process-wide diagnostic callback fired when an internal
/// invariant check fails, in place of the debugger pause a developer build
/// would get. Best-effort only: it receives the formatted failure message and
/// must not affect control flow.
///
/// The first install wins; returns `false` if a hook was already set.
pub fn set_debug_hook(hook: fn(&str)) -> bool {
    DEBUG_HOOK.set(hook).is_ok()
}

/// No-op unless a hook is installed.
pub(crate) fn fire_debug_hook(message: &str) {
    if let Some(hook) = DEBUG_HOOK.get() {
        hook(message);
    }
}
