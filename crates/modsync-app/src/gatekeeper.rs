//! Startup and the inbound-inventory use case.

use crate::session::{ConnectionId, KickReason, SessionControl};
use anyhow::Context;
use camino::Utf8Path;
use modsync_domain::policy::PolicyConfig;
use modsync_domain::report::Decision;
use modsync_lists::RuleLists;
use modsync_settings::{Overrides, ResolvedSettings};
use modsync_types::ModInventory;

/// Input for the startup use case.
#[derive(Clone, Debug)]
pub struct StartInput<'a> {
    /// Directory holding `modsync.toml` and `ModSyncLists/`.
    pub config_dir: &'a Utf8Path,
    /// Settings file contents (empty string if not found).
    pub settings_text: &'a str,
    /// CLI or host overrides.
    pub overrides: Overrides,
}

/// Everything startup produced.
#[derive(Debug)]
pub struct StartOutput {
    pub gatekeeper: Gatekeeper,
    pub settings: ResolvedSettings,
    pub lists: RuleLists,
}

/// Owns the policy for the rest of the process and judges each peer against it.
///
/// The policy is immutable after construction, so one `Gatekeeper` can be shared across
/// threads and evaluate several peers at once.
#[derive(Clone, Debug)]
pub struct Gatekeeper {
    policy: PolicyConfig,
}

impl Gatekeeper {
    /// Resolve settings, load and repair the rule lists, and build the policy once.
    ///
    /// This is the only place modsync touches the filesystem. Any error here aborts startup.
    pub fn start(input: StartInput<'_>) -> anyhow::Result<StartOutput> {
        let cfg = if input.settings_text.trim().is_empty() {
            modsync_settings::ModSyncSettingsV1::default()
        } else {
            modsync_settings::parse_settings_toml(input.settings_text)
                .context("parse settings")?
        };
        let settings = modsync_settings::resolve_settings(cfg, input.overrides)
            .context("resolve settings")?;

        let lists =
            modsync_lists::load_rule_lists(input.config_dir).context("load rule lists")?;

        let policy = PolicyConfig::new(
            settings.toggles,
            lists.required.entries.clone(),
            lists.banned.entries.clone(),
            lists.approved.entries.clone(),
        );
        tracing::info!(
            profile = %settings.profile,
            required = policy.required.len(),
            banned = policy.banned.len(),
            approved = policy.approved.len(),
            "mod policy ready"
        );

        Ok(StartOutput {
            gatekeeper: Self::new(policy),
            settings,
            lists,
        })
    }

    pub fn new(policy: PolicyConfig) -> Self {
        Self { policy }
    }

    /// The policy built at startup. Same instance on every call.
    pub fn policy(&self) -> &PolicyConfig {
        &self.policy
    }

    /// Evaluate an inventory and log a warning for every failed rule.
    pub fn evaluate(&self, inventory: &ModInventory) -> Decision {
        let decision = modsync_domain::evaluate(inventory, &self.policy);
        for finding in &decision.findings {
            tracing::warn!(
                check = %finding.check_id,
                subject = finding.subject.as_deref().unwrap_or("-"),
                "{}",
                finding.message
            );
        }
        decision
    }

    /// Entry point for the transport layer when a client reports its mod list.
    ///
    /// On rejection the connection is dropped through `session` before returning.
    pub fn on_client_inventory<S>(
        &self,
        connection: ConnectionId,
        inventory: &ModInventory,
        session: &mut S,
    ) -> Decision
    where
        S: SessionControl + ?Sized,
    {
        tracing::info!(%connection, mods = inventory.len(), "mod list received from client");
        log_mods(inventory);

        let decision = self.evaluate(inventory);
        if !decision.accepted() {
            let reason = KickReason::IncompatibleMods;
            tracing::warn!(%connection, reason = reason.as_str(), "disconnecting client");
            session.disconnect(connection, reason);
        }
        decision
    }

    /// Entry point when the server side reports its own mod list. Diagnostic only.
    pub fn on_server_inventory(&self, inventory: &ModInventory) {
        tracing::info!(mods = inventory.len(), "mod list received from server");
        log_mods(inventory);
    }
}

fn log_mods(inventory: &ModInventory) {
    for m in inventory {
        tracing::info!("{} : {}", m.id, m.version);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use modsync_domain::policy::PolicyToggles;
    use modsync_domain::rule::RuleEntry;
    use modsync_lists::{list_path, ListKind, SyncAction};
    use modsync_types::{ModVersion, ReportedMod};

    #[derive(Default)]
    struct RecordingSession {
        kicked: Vec<(ConnectionId, KickReason)>,
    }

    impl SessionControl for RecordingSession {
        fn disconnect(&mut self, connection: ConnectionId, reason: KickReason) {
            self.kicked.push((connection, reason));
        }
    }

    fn utf8_root(tmp: &tempfile::TempDir) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf8 path")
    }

    fn modded(id: &str, version: (u32, u32, u32)) -> ModInventory {
        ModInventory::new(vec![ReportedMod::new(
            id,
            ModVersion::new(version.0, version.1, version.2),
        )])
    }

    #[test]
    fn start_creates_lists_and_uses_default_profile() {
        let tmp = tempfile::tempdir().expect("temp dir");
        let root = utf8_root(&tmp);

        let out = Gatekeeper::start(StartInput {
            config_dir: &root,
            settings_text: "",
            overrides: Overrides::default(),
        })
        .expect("start");

        assert_eq!(out.settings.profile, "default");
        assert!(out.lists.iter().all(|l| l.action == SyncAction::Created));
        assert_eq!(out.gatekeeper.policy().toggles, PolicyToggles::default());
        assert!(list_path(&root, ListKind::Approved).exists());
    }

    #[test]
    fn start_loads_rows_into_policy() {
        let tmp = tempfile::tempdir().expect("temp dir");
        let root = utf8_root(&tmp);
        let path = list_path(&root, ListKind::Banned);
        std::fs::create_dir_all(path.parent().expect("parent")).expect("mkdir");
        std::fs::write(
            &path,
            modsync_lists::render(
                ListKind::Banned.documentation(),
                &["Cheat | false | | 2.0.0".to_string()],
            ),
        )
        .expect("write banned list");

        let out = Gatekeeper::start(StartInput {
            config_dir: &root,
            settings_text: "enforce_banned = true\n",
            overrides: Overrides::default(),
        })
        .expect("start");

        let gk = &out.gatekeeper;
        assert_eq!(gk.policy().banned.len(), 1);
        assert!(!gk.evaluate(&modded("Cheat", (1, 5, 0))).accepted());
        assert!(gk.evaluate(&modded("Cheat", (3, 0, 0))).accepted());
    }

    #[test]
    fn start_rejects_bad_settings() {
        let tmp = tempfile::tempdir().expect("temp dir");
        let root = utf8_root(&tmp);
        let err = Gatekeeper::start(StartInput {
            config_dir: &root,
            settings_text: "allow_modded = 3\n",
            overrides: Overrides::default(),
        })
        .expect_err("bad settings");
        assert!(format!("{err:#}").contains("parse settings"));
    }

    #[test]
    fn rejected_client_is_disconnected() {
        let gk = Gatekeeper::new(PolicyConfig::new(
            PolicyToggles {
                enforce_required: true,
                ..PolicyToggles::permissive()
            },
            vec![RuleEntry::parse("Core | false | 1.0.0 | ").expect("rule")],
            Vec::new(),
            Vec::new(),
        ));
        let mut session = RecordingSession::default();

        let old = modded("Core", (0, 9, 0));
        let decision = gk.on_client_inventory(ConnectionId(7), &old, &mut session);
        assert!(!decision.accepted());
        assert_eq!(session.kicked, vec![(ConnectionId(7), KickReason::IncompatibleMods)]);

        let current = modded("Core", (1, 0, 0));
        let decision = gk.on_client_inventory(ConnectionId(8), &current, &mut session);
        assert!(decision.accepted());
        assert_eq!(session.kicked.len(), 1);
    }

    #[test]
    fn policy_is_the_same_instance_every_call() {
        let gk = Gatekeeper::new(PolicyConfig::default());
        assert!(std::ptr::eq(gk.policy(), gk.policy()));
        gk.on_server_inventory(&modded("Anything", (1, 0, 0)));
    }

    #[test]
    fn gatekeeper_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Gatekeeper>();
    }
}
