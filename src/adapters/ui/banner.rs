//! Gradient ASCII banner (CAMPUS EVENTS), shown once at startup.

use crossterm::ExecutableCommand;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use figlet_rs::FIGfont;
use std::io::{Write, stdout};

/// Campus Indigo (#4b3fd6).
const CAMPUS_INDIGO: (u8, u8, u8) = (0x4b, 0x3f, 0xd6);
/// Event Amber (#ffb627).
const EVENT_AMBER: (u8, u8, u8) = (0xff, 0xb6, 0x27);

/// Linear interpolation between two RGB colors. `t` in [0.0, 1.0].
fn lerp_rgb(a: (u8, u8, u8), b: (u8, u8, u8), t: f64) -> (u8, u8, u8) {
    let r = (f64::from(a.0) * (1.0 - t) + f64::from(b.0) * t).round() as u8;
    let g = (f64::from(a.1) * (1.0 - t) + f64::from(b.1) * t).round() as u8;
    let bl = (f64::from(a.2) * (1.0 - t) + f64::from(b.2) * t).round() as u8;
    (r, g, bl)
}

/// Prints "CampUs" in the standard figlet font with an indigo-to-amber
/// gradient, then the version. Falls back to a plain title if the font fails.
pub fn print_welcome() {
    let mut out = stdout();
    let art = FIGfont::standard()
        .ok()
        .and_then(|font| font.convert("CampUs").map(|fig| fig.to_string()))
        .unwrap_or_else(|| "CampUsConnect".to_string());
    let lines: Vec<&str> = art.lines().collect();
    let total = lines.len().max(1);

    for (i, line) in lines.iter().enumerate() {
        let t = if total <= 1 {
            1.0
        } else {
            i as f64 / (total - 1) as f64
        };
        let (r, g, b) = lerp_rgb(CAMPUS_INDIGO, EVENT_AMBER, t);
        let _ = out.execute(SetForegroundColor(Color::Rgb { r, g, b }));
        let _ = out.execute(Print(line));
        let _ = out.execute(Print("\r\n"));
        let _ = out.execute(ResetColor);
    }

    let version = env!("CARGO_PKG_VERSION");
    let _ = out.execute(SetForegroundColor(Color::Rgb {
        r: EVENT_AMBER.0,
        g: EVENT_AMBER.1,
        b: EVENT_AMBER.2,
    }));
    let _ = out.execute(Print(format!(
        "CampUsConnect v{} - find your next tech adventure\r\n",
        version
    )));
    let _ = out.execute(ResetColor);
    let _ = out.flush();
}
