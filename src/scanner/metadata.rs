//! Platform glue for per-entry metadata: mode strings and owner names.

use std::fs::Metadata;

use tracing::trace;

const PERMISSION_CHARS: [char; 3] = ['r', 'w', 'x'];

/// Render a type character followed by nine `rwx` permission characters.
pub fn format_mode(kind: char, bits: u32) -> String {
    let mut mode = String::with_capacity(10);
    mode.push(kind);

    for i in 0..9 {
        let mask = 1 << (8 - i);
        if bits & mask != 0 {
            mode.push(PERMISSION_CHARS[i % 3]);
        } else {
            mode.push('-');
        }
    }

    mode
}

#[cfg(unix)]
pub fn mode_string(metadata: &Metadata) -> String {
    use std::os::unix::fs::{FileTypeExt, PermissionsExt};

    let file_type = metadata.file_type();
    let kind = if file_type.is_dir() {
        'd'
    } else if file_type.is_symlink() {
        'l'
    } else if file_type.is_fifo() {
        'p'
    } else if file_type.is_socket() {
        's'
    } else if file_type.is_char_device() {
        'c'
    } else if file_type.is_block_device() {
        'b'
    } else {
        '-'
    };

    format_mode(kind, metadata.permissions().mode())
}

#[cfg(not(unix))]
pub fn mode_string(metadata: &Metadata) -> String {
    let file_type = metadata.file_type();
    let kind = if file_type.is_dir() {
        'd'
    } else if file_type.is_symlink() {
        'l'
    } else {
        '-'
    };
    let bits = if metadata.permissions().readonly() { 0o444 } else { 0o666 };

    format_mode(kind, bits)
}

/// Owner and group display names. Unknown ids give empty strings.
#[cfg(unix)]
pub fn owner_and_group(metadata: &Metadata) -> (String, String) {
    use std::os::unix::fs::MetadataExt;

    let owner = users::get_user_by_uid(metadata.uid())
        .map(|user| user.name().to_string_lossy().into_owned());
    let group = users::get_group_by_gid(metadata.gid())
        .map(|group| group.name().to_string_lossy().into_owned());

    if owner.is_none() || group.is_none() {
        trace!(uid = metadata.uid(), gid = metadata.gid(), "unresolved owner or group");
    }

    (owner.unwrap_or_default(), group.unwrap_or_default())
}

#[cfg(not(unix))]
pub fn owner_and_group(_metadata: &Metadata) -> (String, String) {
    trace!("owner lookup not supported on this platform");
    (String::new(), String::new())
}
