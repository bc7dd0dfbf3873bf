use crate::policy::PolicyConfig;
use modsync_types::{ids, Finding, ModInventory};
use serde_json::json;

pub fn run(inventory: &ModInventory, policy: &PolicyConfig, out: &mut Vec<Finding>) {
    if !policy.toggles.enforce_banned {
        return;
    }

    for reported in inventory {
        let Some(entry) = policy.banned.iter().find(|e| e.matches(reported)) else {
            continue;
        };

        out.push(Finding {
            check_id: ids::CHECK_MODS_BANNED.to_string(),
            code: ids::CODE_BANNED_MOD.to_string(),
            message: format!("banned mod: {} {}", reported.id, reported.version),
            subject: Some(reported.id.clone()),
            help: Some(format!(
                "Remove {} or use a version outside {}.",
                reported.id,
                entry.range_label()
            )),
            data: json!({
                "mod": reported.id,
                "version": reported.version.to_string(),
                "banned": entry.range_label(),
            }),
        });
    }
}
