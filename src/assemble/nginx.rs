//! Edge-proxy documents: the nginx main configuration and the site vhost.
//!
//! When Varnish sits in front of the stack, the fastcgi cache blocks in
//! BOTH documents are replaced by the same explanatory comment instead of
//! emitting directives that would cache the same content twice.

use super::Document;
use crate::engine::DerivedSettings;
use crate::profile::ServerProfile;

/// Emitted in place of the fastcgi cache block when Varnish is active.
pub(crate) const EDGE_CACHE_SUPERSEDED: &str = "    # Varnish caches full pages in front of this server; the local\n    # fastcgi_cache directives are omitted to avoid caching the same\n    # content twice.";

pub fn render_main(profile: &ServerProfile, derived: &DerivedSettings) -> Document {
    let cache_zone = if profile.has_varnish {
        EDGE_CACHE_SUPERSEDED.to_string()
    } else {
        [
            "    fastcgi_cache_path /var/cache/nginx levels=1:2 keys_zone=APPCACHE:100m inactive=60m;",
            "    fastcgi_cache_key \"$scheme$request_method$host$request_uri\";",
        ]
        .join("\n")
    };

    let body = format!(
        r#"# nginx.conf - edge proxy main configuration
# generated by stacktune

user www-data;
worker_processes {workers};
worker_rlimit_nofile 65535;
pid /run/nginx.pid;

events {{
    worker_connections {connections};
    multi_accept on;
    use epoll;
}}

http {{
    sendfile on;
    tcp_nopush on;
    tcp_nodelay on;
    keepalive_timeout 65;
    types_hash_max_size 2048;
    server_tokens off;

    include /etc/nginx/mime.types;
    default_type application/octet-stream;

    gzip on;
    gzip_vary on;
    gzip_comp_level 5;
    gzip_types text/plain text/css application/json application/javascript text/xml application/xml image/svg+xml;

{cache_zone}

    include /etc/nginx/conf.d/*.conf;
    include /etc/nginx/sites-enabled/*;
}}
"#,
        workers = derived.edge_worker_processes,
        connections = derived.edge_worker_connections,
        cache_zone = cache_zone,
    );

    Document::new("nginx-main", "nginx.conf", body)
}

pub fn render_vhost(profile: &ServerProfile) -> Document {
    let cache_rules = if profile.has_varnish {
        EDGE_CACHE_SUPERSEDED.to_string()
    } else {
        [
            "    set $skip_cache 0;",
            "    if ($request_method = POST) {",
            "        set $skip_cache 1;",
            "    }",
            "    if ($query_string != \"\") {",
            "        set $skip_cache 1;",
            "    }",
            "    if ($request_uri ~* \"/wp-admin/|/cart/|/checkout/|/my-account/\") {",
            "        set $skip_cache 1;",
            "    }",
            "    if ($http_cookie ~* \"comment_author|wordpress_[a-f0-9]+|wp-postpass|woocommerce_items_in_cart\") {",
            "        set $skip_cache 1;",
            "    }",
        ]
        .join("\n")
    };

    let php_cache_directives = if profile.has_varnish {
        String::new()
    } else {
        [
            "        fastcgi_cache APPCACHE;",
            "        fastcgi_cache_valid 200 301 302 60m;",
            "        fastcgi_cache_bypass $skip_cache;",
            "        fastcgi_no_cache $skip_cache;",
            "        add_header X-Cache $upstream_cache_status;",
            "",
        ]
        .join("\n")
    };

    let body = format!(
        r#"# site.conf - edge proxy virtual host
# generated by stacktune

server {{
    listen 80 default_server;
    server_name _;

    root /var/www/html;
    index index.php index.html;

    access_log /var/log/nginx/access.log;
    error_log /var/log/nginx/error.log;

    client_max_body_size 64m;

{cache_rules}

    location / {{
        try_files $uri $uri/ /index.php?$args;
    }}

    location ~ \.php$ {{
        include snippets/fastcgi-php.conf;
        fastcgi_pass unix:/run/php/php{php_version}-fpm.sock;
        fastcgi_read_timeout 300;
        fastcgi_buffers 16 16k;
        fastcgi_buffer_size 32k;
{php_cache_directives}    }}

    location ~* \.(css|js|png|jpg|jpeg|gif|ico|svg|woff2?)$ {{
        expires 30d;
        add_header Cache-Control "public, no-transform";
    }}

    location ~ /\.ht {{
        deny all;
    }}
}}
"#,
        cache_rules = cache_rules,
        php_cache_directives = php_cache_directives,
        php_version = profile.php_version,
    );

    Document::new("nginx-vhost", "site.conf", body)
}
