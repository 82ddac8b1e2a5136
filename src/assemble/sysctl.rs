//! Kernel-tuning document (`sysctl.conf`).

use super::Document;
use crate::engine::DerivedSettings;

pub fn render(derived: &DerivedSettings) -> Document {
    let body = format!(
        r#"# sysctl.conf - kernel tuning
# generated by stacktune

net.core.somaxconn = 65535
net.core.netdev_max_backlog = 65535
net.ipv4.tcp_max_syn_backlog = 65535
net.ipv4.tcp_fin_timeout = 15
net.ipv4.tcp_tw_reuse = 1
net.ipv4.ip_local_port_range = 1024 65535

vm.swappiness = 10
vm.dirty_ratio = 15
vm.dirty_background_ratio = 5

kernel.shmmax = {shmmax}
kernel.shmall = {shmall}
fs.file-max = 2097152
"#,
        shmmax = derived.shmmax_bytes,
        shmall = derived.shmall_pages,
    );

    Document::new("sysctl", "sysctl.conf", body)
}
