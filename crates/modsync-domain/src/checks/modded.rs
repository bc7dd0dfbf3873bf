use crate::policy::PolicyConfig;
use modsync_types::{ids, Finding, ModInventory};
use serde_json::json;

pub fn run(inventory: &ModInventory, policy: &PolicyConfig, out: &mut Vec<Finding>) {
    if policy.toggles.allow_modded || inventory.is_vanilla() {
        return;
    }

    out.push(Finding {
        check_id: ids::CHECK_PEER_MODDED.to_string(),
        code: ids::CODE_MODDED_DISALLOWED.to_string(),
        message: "modded players disallowed".to_string(),
        subject: None,
        help: Some("This server only accepts unmodded clients.".to_string()),
        data: json!({ "mods_reported": inventory.len() }),
    });
}
