//! Built-in training missions.
//!
//! Hand-authored content, fixed at process start. The engine performs no
//! file or network I/O; this module is the only mission source.

use crate::catalog::MissionCatalog;
use crate::mission::{Mission, MissionStep};

/// Catalog preloaded with the built-in missions, in their canonical
/// registration order.
pub fn builtin_catalog() -> MissionCatalog {
    let mut catalog = MissionCatalog::new();
    for mission in builtin_missions() {
        catalog.register(mission);
    }
    catalog
}

pub fn builtin_missions() -> Vec<Mission> {
    vec![missing_route(), log_chaos(), sandbox_check()]
}

fn missing_route() -> Mission {
    Mission {
        id: "missing-route".to_string(),
        title: "Restore Network Connectivity".to_string(),
        difficulty: "Intermediate".to_string(),
        duration_seconds: 900,
        scenario: "A remote employee lost connectivity after a VPN disconnect.".to_string(),
        objectives: vec![
            "Inspect network interface configuration".to_string(),
            "Restore missing default route".to_string(),
            "Verify connectivity".to_string(),
        ],
        recommended_commands: vec![
            "ip addr".to_string(),
            "ip route".to_string(),
            "ping".to_string(),
        ],
        intro: "You're on call and the support desk trusts you with restoring service. \
                The user reports they can't reach any websites after their VPN session dropped."
            .to_string(),
        steps: vec![
            MissionStep {
                id: "inspect".to_string(),
                prompt: "Check the active network interfaces and identify any missing routes."
                    .to_string(),
                expected_commands: vec![
                    "ip addr".to_string(),
                    "sudo ip addr".to_string(),
                    "ifconfig".to_string(),
                ],
                success_output: vec![
                    "eth0: flags=4163<UP,BROADCAST,RUNNING,MULTICAST> mtu 1500".to_string(),
                    "    inet 10.0.0.42/24 brd 10.0.0.255 scope global eth0".to_string(),
                ],
                next_prompt: Some(
                    "Nice. The default gateway is missing. Add a route via 10.0.0.1.".to_string(),
                ),
                hint: "Use ip route add to define the default route.".to_string(),
                score: 100,
            },
            MissionStep {
                id: "route".to_string(),
                prompt: "Add the missing default route using the correct gateway.".to_string(),
                expected_commands: vec![
                    "ip route add default via 10.0.0.1".to_string(),
                    "sudo ip route add default via 10.0.0.1".to_string(),
                ],
                success_output: vec!["Route added: default via 10.0.0.1 dev eth0".to_string()],
                next_prompt: Some("Great! Confirm the fix by pinging 8.8.8.8.".to_string()),
                hint: "Use ping with ctrl+c to stop after a few replies.".to_string(),
                score: 150,
            },
            MissionStep {
                id: "ping".to_string(),
                prompt: "Validate connectivity by pinging a well-known IP.".to_string(),
                expected_commands: vec!["ping 8.8.8.8".to_string(), "ping -c 4 8.8.8.8".to_string()],
                success_output: vec![
                    "PING 8.8.8.8 (8.8.8.8) 56(84) bytes of data.".to_string(),
                    "64 bytes from 8.8.8.8: icmp_seq=1 ttl=115 time=22.0 ms".to_string(),
                    "--- 8.8.8.8 ping statistics ---".to_string(),
                    "3 packets transmitted, 3 received, 0% packet loss".to_string(),
                ],
                next_prompt: Some(
                    "All set! The user confirms internet access is back.".to_string(),
                ),
                hint: "A simple ping test should do.".to_string(),
                score: 200,
            },
        ],
    }
}

fn log_chaos() -> Mission {
    Mission {
        id: "log-chaos".to_string(),
        title: "Calm a Crashing Service".to_string(),
        difficulty: "Advanced".to_string(),
        duration_seconds: 1200,
        scenario:
            "A containerized web service keeps restarting on production and users see 503 errors."
                .to_string(),
        objectives: vec![
            "Inspect recent service logs".to_string(),
            "Identify the failing dependency".to_string(),
            "Restart the service after applying the fix".to_string(),
        ],
        recommended_commands: vec![
            "journalctl".to_string(),
            "systemctl status".to_string(),
            "systemctl restart".to_string(),
        ],
        intro: "Traffic is spiking and leadership paged you directly. \
                The API is flapping and customers are complaining."
            .to_string(),
        steps: vec![
            MissionStep {
                id: "logs".to_string(),
                prompt: "Check the service logs for the last five minutes and spot the crash loop."
                    .to_string(),
                expected_commands: vec![
                    "journalctl -u web-api --since -5m".to_string(),
                    "sudo journalctl -u web-api --since -5m".to_string(),
                ],
                success_output: vec![
                    "Oct 10 11:02:01 api-host web-api[4242]: ImportError: cannot import name 'connect_db'"
                        .to_string(),
                    "Oct 10 11:02:01 api-host systemd[1]: web-api.service: Main process exited, code=exited"
                        .to_string(),
                ],
                next_prompt: Some(
                    "Looks like a missing dependency. Inspect the service status for clues."
                        .to_string(),
                ),
                hint: "Use journalctl with --since to narrow down logs.".to_string(),
                score: 120,
            },
            MissionStep {
                id: "status".to_string(),
                prompt: "Check the service status to confirm the failing unit and environment."
                    .to_string(),
                expected_commands: vec![
                    "systemctl status web-api".to_string(),
                    "sudo systemctl status web-api".to_string(),
                ],
                success_output: vec![
                    "web-api.service - Web API".to_string(),
                    "   Loaded: loaded (/etc/systemd/system/web-api.service; enabled)".to_string(),
                    "   Active: failed (Result: exit-code)".to_string(),
                    "   Process: 4242 ExecStart=/opt/web-api/start.sh (code=exited, status=1/FAILURE)"
                        .to_string(),
                ],
                next_prompt: Some(
                    "Add the missing dependency and restart the service to confirm.".to_string(),
                ),
                hint: "systemctl status provides the recent log tail too.".to_string(),
                score: 160,
            },
            MissionStep {
                id: "restart".to_string(),
                prompt: "Restart the service now that the dependency is fixed in the container image."
                    .to_string(),
                expected_commands: vec![
                    "systemctl restart web-api".to_string(),
                    "sudo systemctl restart web-api".to_string(),
                ],
                success_output: vec![
                    "web-api.service - Web API".to_string(),
                    "   Active: active (running)".to_string(),
                ],
                next_prompt: Some(
                    "Service is running steady. Update status page and breathe.".to_string(),
                ),
                hint: "Use systemctl restart followed by status to double-check.".to_string(),
                score: 220,
            },
        ],
    }
}

fn sandbox_check() -> Mission {
    Mission {
        id: "sandbox-check".to_string(),
        title: "Warm Up Diagnostics".to_string(),
        difficulty: "Beginner".to_string(),
        duration_seconds: 300,
        scenario: "A practice host needs a basic health check before training begins.".to_string(),
        objectives: vec![
            "Print the working directory".to_string(),
            "List the files in the directory".to_string(),
        ],
        recommended_commands: vec!["pwd".to_string(), "ls".to_string()],
        intro: "Use this quick mission to verify the terminal and scoring flow before tackling \
                tougher incidents."
            .to_string(),
        steps: vec![
            MissionStep {
                id: "pwd".to_string(),
                prompt: "Confirm where you're located in the filesystem.".to_string(),
                expected_commands: vec![
                    "pwd".to_string(),
                    "printf $pwd".to_string(),
                    "echo $pwd".to_string(),
                ],
                success_output: vec!["/home/sysadmin".to_string()],
                next_prompt: Some(
                    "Great. Now enumerate the files so you know what tools are available."
                        .to_string(),
                ),
                hint: "Run pwd or an equivalent command to print the current directory."
                    .to_string(),
                score: 25,
            },
            MissionStep {
                id: "ls".to_string(),
                prompt: "List the files to ensure your toolkit is present.".to_string(),
                expected_commands: vec!["ls".to_string(), "ls -la".to_string()],
                success_output: vec!["tools.sh  runbook.md  diagnostics.log".to_string()],
                next_prompt: Some("Sandbox checks out. You're ready for the real missions!".to_string()),
                hint: "Use ls to display directory contents.".to_string(),
                score: 50,
            },
        ],
    }
}
