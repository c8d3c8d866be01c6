use std::fmt;

use super::Talkgroup;

/// A talkgroup temporarily merged with up to two other talkgroups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchGroup {
    pub patch_group: Talkgroup,
    patched: Vec<Talkgroup>,
    patched_assigned: bool,
}

impl PatchGroup {
    pub fn new(patch_group: Talkgroup) -> Self {
        PatchGroup {
            patch_group,
            patched: Vec::new(),
            patched_assigned: false,
        }
    }

    /// A patched slot is in use only when it is non-zero and differs from the parent group.
    pub fn is_patched_slot_present(parent: u32, slot: u32) -> bool {
        slot != 0 && slot != parent
    }

    /// Assigns the patched-in groups. Only the first call takes effect.
    pub fn add_patched_groups(&mut self, groups: Vec<Talkgroup>) {
        if self.patched_assigned {
            tracing::warn!("patched groups for {} already assigned, ignoring {:?}", self.patch_group, groups);
            return;
        }
        self.patched_assigned = true;
        self.patched = groups;
    }

    pub fn patched_groups(&self) -> &[Talkgroup] {
        &self.patched
    }
}

impl fmt::Display for PatchGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let patched: Vec<String> = self.patched.iter().map(|g| g.to_string()).collect();
        write!(f, "P:{}[{}]", self.patch_group, patched.join(","))
    }
}
