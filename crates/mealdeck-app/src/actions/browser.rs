//! Opening links with the system browser

use std::process::Command;

/// Open a URL in the system browser (cross-platform, fire-and-forget).
///
/// If `browser` is non-empty, uses it as the browser command.
/// Otherwise uses the platform-default opener.
pub fn open_url_in_browser(url: &str, browser: &str) -> std::io::Result<()> {
    if !browser.trim().is_empty() {
        Command::new(browser.trim()).arg(url).spawn()?;
        return Ok(());
    }

    #[cfg(target_os = "macos")]
    {
        Command::new("open").arg(url).spawn()?;
        return Ok(());
    }

    #[cfg(target_os = "linux")]
    {
        Command::new("xdg-open").arg(url).spawn()?;
        return Ok(());
    }

    #[cfg(target_os = "windows")]
    {
        Command::new("cmd").args(["/C", "start", "", url]).spawn()?;
        return Ok(());
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        return Err(std::io::Error::new(
            std::io::ErrorKind::Unsupported,
            "no browser opener available for this platform",
        ));
    }

    #[allow(unreachable_code)]
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_browser_command_is_an_error() {
        let result = open_url_in_browser(
            "https://www.youtube.com/watch?v=abc",
            "mealdeck-no-such-browser-binary",
        );
        assert!(result.is_err());
    }
}
