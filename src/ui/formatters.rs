use chrono::{DateTime, Local, Utc};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Format timestamp in local time (YYYY-MM-DD HH:MM)
pub fn format_time(time: &DateTime<Utc>) -> String {
    let datetime: DateTime<Local> = time.with_timezone(&Local);
    datetime.format("%Y-%m-%d %H:%M").to_string()
}

/// Coarse "N units ago" description of the time between `since` and `now`
pub fn format_elapsed(since: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    let secs = (*now - *since).num_seconds();
    if secs < 0 {
        return "in the future".to_string();
    }

    let (amount, unit) = match secs {
        0..=59 => return "just now".to_string(),
        60..=3_599 => (secs / 60, "minute"),
        3_600..=86_399 => (secs / 3_600, "hour"),
        _ => (secs / 86_400, "day"),
    };

    if amount == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", amount, unit)
    }
}

/// Text battery gauge, e.g. `[######----]`
pub fn battery_bar(level: u8, width: usize) -> String {
    let level = level.min(100) as usize;
    let filled = (level * width + 50) / 100;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

/// Pad with spaces to a display width, truncating with an ellipsis if longer
pub fn fit_to_width(text: &str, width: usize) -> String {
    let current = UnicodeWidthStr::width(text);
    if current <= width {
        return format!("{}{}", text, " ".repeat(width - current));
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    used += 1;
    out.push_str(&" ".repeat(width.saturating_sub(used)));
    out
}
