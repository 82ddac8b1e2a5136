//! Runtime document (`php.ini` overrides).
//!
//! Session storage is backed by Redis when the object cache is enabled and
//! falls back to the file-based handler otherwise.

use super::Document;
use crate::profile::ServerProfile;

pub(crate) const SESSION_BACKEND_REDIS: &str = "session.save_handler = redis\nsession.save_path = \"tcp://127.0.0.1:6379\"";
pub(crate) const SESSION_BACKEND_FILES: &str = "session.save_handler = files\nsession.save_path = \"/var/lib/php/sessions\"";

pub fn render(profile: &ServerProfile) -> Document {
    let session_backend = if profile.has_redis {
        SESSION_BACKEND_REDIS
    } else {
        SESSION_BACKEND_FILES
    };

    let body = format!(
        r#"; php.ini - runtime overrides
; generated by stacktune for PHP {php_version}

memory_limit = 256M
upload_max_filesize = 64M
post_max_size = 64M
max_execution_time = 300
max_input_time = 300
max_input_vars = 3000

; opcache
opcache.enable = 1
opcache.memory_consumption = 256
opcache.interned_strings_buffer = 16
opcache.max_accelerated_files = 10000
opcache.validate_timestamps = 0

; sessions
{session_backend}
"#,
        php_version = profile.php_version,
        session_backend = session_backend,
    );

    Document::new("php-ini", "php.ini", body)
}
