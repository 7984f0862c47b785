//! Wallpaper setter: applies a local image file as the desktop
//! background. Only macOS is wired up; everything else reports an
//! unsupported platform.

use std::path::Path;

use crate::error::Result;

/// Set the desktop background to the image at `path`.
#[cfg(target_os = "macos")]
pub fn set_wallpaper(path: &Path) -> Result<()> {
    use std::process::Command;

    use tracing::info;

    use crate::error::MuralError;

    let script = format!(
        "tell application \"System Events\" to set picture of every desktop to \"{}\"",
        path.display()
    );
    let status = Command::new("osascript").arg("-e").arg(&script).status()?;
    if !status.success() {
        return Err(MuralError::SetWallpaper(format!(
            "osascript exited with {status}"
        )));
    }
    info!(path = %path.display(), "wallpaper set");
    Ok(())
}

/// Set the desktop background to the image at `path`.
#[cfg(not(target_os = "macos"))]
pub fn set_wallpaper(_path: &Path) -> Result<()> {
    Err(crate::error::MuralError::UnsupportedPlatform(
        std::env::consts::OS.to_string(),
    ))
}

#[cfg(all(test, not(target_os = "macos")))]
mod tests {
    use super::*;
    use crate::error::MuralError;

    #[test]
    fn non_macos_reports_unsupported_platform() {
        match set_wallpaper(Path::new("/tmp/wall.jpg")) {
            Err(MuralError::UnsupportedPlatform(os)) => {
                assert_eq!(os, std::env::consts::OS);
            }
            other => panic!("expected UnsupportedPlatform, got {other:?}"),
        }
    }
}
