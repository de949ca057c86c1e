/// Preferred appearance used to pick gradient endpoints and panel colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Appearance {
    Light,
    Dark,
}

/// Try to detect the terminal background appearance.
///
/// Checks the COLORFGBG convention first (set by several terminal emulators),
/// then falls back to the OS-level app theme preference. Returns None when no
/// hint is available; callers must substitute a documented default.
pub fn detect_appearance() -> Option<Appearance> {
    detect_via_colorfgbg().or_else(detect_via_os_hint)
}

/// COLORFGBG is "fg;bg" (sometimes "fg;default;bg"); background palette
/// indexes 0..=6 and 8 are dark.
fn detect_via_colorfgbg() -> Option<Appearance> {
    let raw = std::env::var("COLORFGBG").ok()?;
    let bg = raw.split(';').next_back()?.trim();
    let idx: u8 = bg.parse().ok()?;
    if idx <= 6 || idx == 8 {
        Some(Appearance::Dark)
    } else {
        Some(Appearance::Light)
    }
}

/// Detect OS-level app theme preference (best-effort, with conservative fallbacks)
fn detect_via_os_hint() -> Option<Appearance> {
    #[cfg(target_os = "macos")]
    {
        use std::process::Command;
        // `defaults read -g AppleInterfaceStyle` returns "Dark" when dark mode is on.
        if let Ok(output) = Command::new("/usr/bin/defaults")
            .args(["read", "-g", "AppleInterfaceStyle"])
            .output()
        {
            if output.status.success() {
                let stdout = String::from_utf8_lossy(&output.stdout);
                if stdout.to_ascii_lowercase().contains("dark") {
                    return Some(Appearance::Dark);
                }
                return Some(Appearance::Light);
            }
        }
        // Missing key means dark mode was never enabled.
        return Some(Appearance::Light);
    }

    #[cfg(target_os = "windows")]
    {
        // HKCU\...\Personalize\AppsUseLightTheme (1 = light, 0 = dark)
        use winreg::enums::HKEY_CURRENT_USER;
        use winreg::RegKey;
        let hkcu = RegKey::predef(HKEY_CURRENT_USER);
        if let Ok(personalize) =
            hkcu.open_subkey("Software\\Microsoft\\Windows\\CurrentVersion\\Themes\\Personalize")
        {
            if let Ok(v) = personalize.get_value::<u32, _>("AppsUseLightTheme") {
                return Some(if v == 0 {
                    Appearance::Dark
                } else {
                    Appearance::Light
                });
            }
        }
        return None;
    }

    #[cfg(target_os = "linux")]
    {
        use std::process::Command;
        // GNOME 42+: color-scheme is 'prefer-dark' or 'default'
        if let Ok(output) = Command::new("gsettings")
            .args(["get", "org.gnome.desktop.interface", "color-scheme"])
            .output()
        {
            if output.status.success() {
                let s = String::from_utf8_lossy(&output.stdout).to_ascii_lowercase();
                if s.contains("prefer-dark") {
                    return Some(Appearance::Dark);
                } else if s.contains("default") {
                    return Some(Appearance::Light);
                }
            }
        }
        // Older GNOME themes often carry "-dark" in the gtk-theme name
        if let Ok(output) = Command::new("gsettings")
            .args(["get", "org.gnome.desktop.interface", "gtk-theme"])
            .output()
        {
            if output.status.success() {
                let s = String::from_utf8_lossy(&output.stdout).to_ascii_lowercase();
                return Some(if s.contains("-dark") {
                    Appearance::Dark
                } else {
                    Appearance::Light
                });
            }
        }
        None
    }

    #[cfg(not(any(target_os = "macos", target_os = "windows", target_os = "linux")))]
    {
        None
    }
}
