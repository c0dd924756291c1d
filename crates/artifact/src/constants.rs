//! Fixed locations and names for the served artifact.

/// Release APK location, relative to the process working directory.
///
/// Produced by `flutter build apk --release`; this crate only ever reads it.
pub const DEFAULT_ARTIFACT_PATH: &str = "build/app/outputs/flutter-apk/app-release.apk";

/// Filename suggested to the client in the `Content-Disposition` header.
pub const DOWNLOAD_NAME: &str = "TaskManager.apk";
