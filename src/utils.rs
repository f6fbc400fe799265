use std::path::PathBuf;

/// Expand a leading `~` or `~/` to the current user's home directory.
pub fn expand_home(p: &str) -> PathBuf {
    if p == "~" || p.starts_with("~/") {
        if let Some(b) = directories::BaseDirs::new() {
            let home = b.home_dir();
            return match p.strip_prefix("~/") {
                Some(rest) => home.join(rest),
                None => home.to_path_buf(),
            };
        }
    }
    PathBuf::from(p)
}

pub fn format_currency(v: f64) -> String {
    format!("{v:.2}")
}

pub fn format_tokens(n: u64) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1e6)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1e3)
    } else {
        n.to_string()
    }
}

pub fn format_duration(minutes: f64) -> String {
    if minutes < 1.0 {
        return "<1m".to_string();
    }
    let h = (minutes / 60.0).floor() as u64;
    let m = (minutes % 60.0).floor() as u64;
    if h > 0 {
        format!("{h}h {m}m")
    } else {
        format!("{m}m")
    }
}
