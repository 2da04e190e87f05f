//! tracing の初期化（stderr 出力）

use tracing_subscriber::EnvFilter;

/// `RUST_LOG` が無いときのフィルタ
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "spec_extractor=debug,spec_extractor_common=debug"
    } else {
        "warn"
    }
}

/// サブスクライバを登録する。二重登録は無視する。
pub fn init(verbose: bool) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_raises_level() {
        assert!(default_directive(true).contains("debug"));
        assert_eq!(default_directive(false), "warn");
    }

    #[test]
    fn test_init_twice_does_not_panic() {
        init(false);
        init(true);
    }
}
