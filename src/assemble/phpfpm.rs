//! Process-manager pool document (PHP-FPM `www.conf`).

use super::Document;
use crate::engine::DerivedSettings;
use crate::profile::ServerProfile;

pub fn render(profile: &ServerProfile, derived: &DerivedSettings) -> Document {
    let body = format!(
        r#"; www.conf - PHP-FPM pool
; generated by stacktune

[www]
user = www-data
group = www-data

listen = /run/php/php{php_version}-fpm.sock
listen.owner = www-data
listen.group = www-data

pm = dynamic
pm.max_children = {max_children}
pm.start_servers = {start_servers}
pm.min_spare_servers = {min_spare}
pm.max_spare_servers = {max_spare}
pm.max_requests = 500
pm.process_idle_timeout = 10s

request_terminate_timeout = 300
request_slowlog_timeout = 10
slowlog = /var/log/php{php_version}-fpm-slow.log

php_admin_value[memory_limit] = 256M
"#,
        php_version = profile.php_version,
        max_children = derived.worker_ceiling,
        start_servers = derived.workers_start,
        min_spare = derived.workers_min_spare,
        max_spare = derived.workers_max_spare,
    );

    Document::new("fpm-pool", "www.conf", body)
}
