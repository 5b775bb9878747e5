use std::path::{Component, Path};

/// Validates that `target_path` strictly resolves _inside_ `base_path`.
/// Rejects traversal attempts using `..` or absolute paths aiming outside
/// the allowed directory.
pub fn is_path_safe(base_path: &Path, target_path: &Path) -> bool {
    // An absolute target MUST start with the base_path
    if target_path.is_absolute() {
        return target_path.starts_with(base_path);
    }

    // Process relative components
    let mut depth = 0;
    for component in target_path.components() {
        match component {
            Component::ParentDir => {
                depth -= 1;
                if depth < 0 {
                    // Attempt to escape the bounds of the base_path
                    return false;
                }
            }
            Component::Normal(_) => {
                depth += 1;
            }
            Component::CurDir => {
                // `.` does nothing to depth
            }
            // Roots or prefixes inside a relative path shouldn't happen,
            // but if they do, it's unsafe.
            Component::RootDir | Component::Prefix(_) => return false,
        }
    }

    true
}
