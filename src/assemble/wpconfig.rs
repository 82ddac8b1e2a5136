//! Application overlay document (`wp-config-snippet.php`).

use super::Document;
use crate::profile::ServerProfile;

pub fn render(profile: &ServerProfile) -> Document {
    let redis_constants = if profile.has_redis {
        concat!(
            "\n",
            "// Redis object cache\n",
            "define('WP_REDIS_HOST', '127.0.0.1');\n",
            "define('WP_REDIS_PORT', 6379);\n",
            "define('WP_REDIS_DATABASE', 0);\n",
            "define('WP_REDIS_MAXTTL', 86400);\n",
        )
    } else {
        ""
    };

    let body = format!(
        r#"<?php
// wp-config-snippet.php - application overlay
// generated by stacktune; merge into wp-config.php above the
// "stop editing" line

define('WP_MEMORY_LIMIT', '256M');
define('WP_MAX_MEMORY_LIMIT', '512M');
define('WP_CACHE', true);
define('DISABLE_WP_CRON', true);
define('WP_POST_REVISIONS', 5);
define('EMPTY_TRASH_DAYS', 7);
define('AUTOSAVE_INTERVAL', 120);
{redis_constants}"#,
        redis_constants = redis_constants,
    );

    Document::new("app-overlay", "wp-config-snippet.php", body)
}
