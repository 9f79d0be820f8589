//! Destination safety boundary.

use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// Lexically join `root` and `authority`, rejecting any result that
/// escapes the root.
///
/// Normalization is purely lexical (`.` dropped, `..` popped) and never
/// touches the filesystem. Must run before any directory creation or
/// external tool invocation: this is the sole safety boundary between a
/// resolved authority and the disk.
pub fn guard(root: &Path, authority: &str) -> Result<PathBuf> {
    let traversal = || Error::PathTraversal {
        root: root.to_path_buf(),
        authority: authority.to_string(),
    };

    let mut destination = root.to_path_buf();
    for component in Path::new(authority).components() {
        match component {
            Component::Normal(part) => destination.push(part),
            Component::CurDir => {}
            Component::ParentDir => {
                if !destination.pop() {
                    return Err(traversal());
                }
            }
            // An absolute authority can never live under the root.
            Component::RootDir | Component::Prefix(_) => return Err(traversal()),
        }
    }

    if destination.starts_with(root) {
        Ok(destination)
    } else {
        Err(traversal())
    }
}
