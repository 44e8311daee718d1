//! Team leaders, rosters, and mission leading.
//!
//! A leader holds shared, non-exclusive handles to heroes that live on
//! their own. Leading a mission applies the mission cost to the leader and
//! to every member, through each member's own mission-completion step.
//!
//! Membership is keyed by [`HeroId`]; a hero appears at most once and a
//! leader can never be a member of their own team. Rosters never form a
//! loop: a leader cannot recruit anyone who already leads them, directly
//! or through other teams, so dropping the last outside handle always
//! frees every hero.
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use capeworks_logic::hero::{HeroCapability, Superhero};
//! use capeworks_logic::team::TeamLeader;
//!
//! let mut leader = TeamLeader::new("Professor X", "Charles Xavier", Vec::new());
//! let cyclops = Rc::new(RefCell::new(Superhero::new("Cyclops", "Scott Summers", Vec::new())));
//! assert!(leader.add_team_member(cyclops.clone()).is_success());
//! assert!(leader.lead_mission("Training").is_success());
//! assert_eq!(cyclops.borrow().energy(), 80);
//! ```

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::constants::LEAD_MISSION_MIN_ENERGY;
use crate::hero::{HeroCapability, HeroId, Superhero};
use crate::outcome::{ActionResult, FailureReason};
use crate::power::Power;
use crate::sealed::Sealed;
use crate::snapshot::HeroVariantState;

/// Shared reference to any hero variant.
///
/// Handles are strong references. A leader keeps its members alive, and
/// [`TeamLeader::add_team_member`] refuses recruits that would close a loop
/// of leaders holding each other.
pub type HeroHandle = Rc<RefCell<dyn HeroCapability>>;

struct TeamMember {
    id: HeroId,
    handle: HeroHandle,
}

/// A hero who recruits others and leads them on missions.
pub struct TeamLeader {
    hero: Superhero,
    team_members: Vec<TeamMember>,
    missions_completed: u32,
}

impl TeamLeader {
    pub fn new(
        name: impl Into<String>,
        secret_identity: impl Into<String>,
        powers: Vec<Power>,
    ) -> Self {
        Self {
            hero: Superhero::new(name, secret_identity, powers),
            team_members: Vec::new(),
            missions_completed: 0,
        }
    }

    pub fn team_size(&self) -> usize {
        self.team_members.len()
    }

    pub fn missions_completed(&self) -> u32 {
        self.missions_completed
    }

    /// Member ids in join order.
    pub fn member_ids(&self) -> Vec<HeroId> {
        self.team_members.iter().map(|m| m.id).collect()
    }

    /// Shared handles to every member, in join order.
    pub fn members(&self) -> impl Iterator<Item = &HeroHandle> {
        self.team_members.iter().map(|m| &m.handle)
    }

    pub fn is_member(&self, id: HeroId) -> bool {
        self.team_members.iter().any(|m| m.id == id)
    }

    pub fn add_team_member(&mut self, hero: HeroHandle) -> ActionResult {
        // Identity check on the cell contents, without borrowing.
        let candidate = hero.as_ptr() as *const ();
        if std::ptr::eq(candidate, self as *const Self as *const ()) {
            log::warn!("{} tried to join their own team", self.name());
            return self.self_membership();
        }
        let Ok(member) = hero.try_borrow() else {
            return ActionResult::failed(
                FailureReason::MemberUnavailable,
                format!("{} cannot recruit a hero who is busy elsewhere.", self.name()),
            );
        };
        let id = member.id();
        if self.is_member(id) {
            return ActionResult::failed(
                FailureReason::AlreadyMember,
                format!("{} is already on the team!", member.name()),
            );
        }
        match self.is_led_by(&*member) {
            Some(false) => {}
            Some(true) => {
                log::warn!(
                    "{} tried to recruit their own leader {}",
                    self.name(),
                    member.name()
                );
                return ActionResult::failed(
                    FailureReason::CircularTeam,
                    format!(
                        "{} cannot recruit {}, who already leads them!",
                        self.name(),
                        member.name()
                    ),
                );
            }
            None => {
                return ActionResult::failed(
                    FailureReason::MemberUnavailable,
                    format!(
                        "{} cannot check {}'s team right now.",
                        self.name(),
                        member.name()
                    ),
                );
            }
        }

        let msg = format!("{} has joined {}'s team!", member.name(), self.name());
        drop(member);
        self.team_members.push(TeamMember { id, handle: hero });
        log::debug!("{} (team size {})", msg, self.team_members.len());
        ActionResult::success(msg)
    }

    /// Lead every member on a mission.
    ///
    /// Refused without touching anyone when the roster is empty, the leader
    /// is below the leading energy threshold, or a member is currently
    /// borrowed elsewhere. Members' own stats are not checked; repeated
    /// missions can drain them to zero.
    pub fn lead_mission(&mut self, mission_name: &str) -> ActionResult {
        if self.team_members.is_empty() {
            return ActionResult::failed(
                FailureReason::NoTeamMembers,
                "Cannot start mission: No team members!",
            );
        }

        if self.energy() < LEAD_MISSION_MIN_ENERGY {
            return ActionResult::failed(
                FailureReason::TooTired,
                format!("{} is too tired to lead a mission...", self.name()),
            );
        }

        // Borrow the whole roster up front so the mission applies to
        // everyone or no one.
        let borrowed: Result<Vec<_>, _> = self
            .team_members
            .iter()
            .map(|m| m.handle.try_borrow_mut())
            .collect();
        let Ok(mut members) = borrowed else {
            return ActionResult::failed(
                FailureReason::MemberUnavailable,
                format!("{} cannot reach every team member right now.", self.name()),
            );
        };

        self.hero.complete_mission();
        for member in members.iter_mut() {
            member.hero_mut().complete_mission();
        }
        drop(members);

        self.missions_completed += 1;
        log::info!(
            "{} led mission '{}' with {} members ({} completed)",
            self.name(),
            mission_name,
            self.team_members.len(),
            self.missions_completed
        );
        ActionResult::success(format!(
            "Mission '{}' completed successfully! Team is tired but victorious.",
            mission_name
        ))
    }

    /// Whether `hero`'s roster, followed through every nested team, holds
    /// this leader. `None` when a hero on the way is borrowed elsewhere.
    fn is_led_by(&self, hero: &dyn HeroCapability) -> Option<bool> {
        let me = self as *const Self as *const ();
        let mut pending = hero.team_handles();
        let mut seen: Vec<*const ()> = Vec::new();
        while let Some(handle) = pending.pop() {
            let ptr = handle.as_ptr() as *const ();
            if std::ptr::eq(ptr, me) {
                return Some(true);
            }
            if seen.contains(&ptr) {
                continue;
            }
            seen.push(ptr);
            let nested = handle.try_borrow().ok()?;
            pending.extend(nested.team_handles());
        }
        Some(false)
    }

    fn self_membership(&self) -> ActionResult {
        ActionResult::failed(
            FailureReason::SelfMembership,
            format!("{} cannot join their own team!", self.name()),
        )
    }
}

impl fmt::Debug for TeamLeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TeamLeader")
            .field("hero", &self.hero)
            .field("member_ids", &self.member_ids())
            .field("missions_completed", &self.missions_completed)
            .finish()
    }
}

impl Sealed for TeamLeader {}

impl HeroCapability for TeamLeader {
    fn hero(&self) -> &Superhero {
        &self.hero
    }

    fn hero_mut(&mut self) -> &mut Superhero {
        &mut self.hero
    }

    fn variant_state(&self) -> HeroVariantState {
        HeroVariantState::Leader {
            member_ids: self.member_ids(),
            missions_completed: self.missions_completed,
        }
    }

    fn team_handles(&self) -> Vec<HeroHandle> {
        self.members().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flying::FlyingHero;

    fn professor_x() -> TeamLeader {
        TeamLeader::new(
            "Professor X",
            "Charles Xavier",
            vec![Power::new("Telepathy", "Read and control minds", 7)],
        )
    }

    fn share<H: HeroCapability + 'static>(hero: H) -> Rc<RefCell<H>> {
        Rc::new(RefCell::new(hero))
    }

    #[test]
    fn test_empty_roster_refuses_mission() {
        let mut px = professor_x();
        let res = px.lead_mission("x");
        assert_eq!(res.failure(), Some(FailureReason::NoTeamMembers));
        assert_eq!(res.message, "Cannot start mission: No team members!");
        assert_eq!(px.missions_completed(), 0);
        assert_eq!(px.energy(), 100);
        assert_eq!(px.mission_count(), 0);
    }

    #[test]
    fn test_add_member_once() {
        let mut px = professor_x();
        let jean = share(Superhero::new("Jean Grey", "Jean Grey", Vec::new()));

        let res = px.add_team_member(jean.clone());
        assert!(res.is_success());
        assert_eq!(res.message, "Jean Grey has joined Professor X's team!");

        let again = px.add_team_member(jean.clone());
        assert_eq!(again.failure(), Some(FailureReason::AlreadyMember));
        assert_eq!(again.message, "Jean Grey is already on the team!");
        assert_eq!(px.team_size(), 1);
    }

    #[test]
    fn test_lead_mission_costs_everyone() {
        let mut px = professor_x();
        let storm = share(FlyingHero::new("Storm", "Ororo Munroe", Vec::new(), 3000.0));
        let logan = share(Superhero::new("Wolverine", "Logan", Vec::new()));
        px.add_team_member(storm.clone());
        px.add_team_member(logan.clone());

        let res = px.lead_mission("Save the City");
        assert!(res.is_success());
        assert_eq!(
            res.message,
            "Mission 'Save the City' completed successfully! Team is tired but victorious."
        );
        assert_eq!(px.missions_completed(), 1);
        assert_eq!(px.mission_count(), 1);
        assert_eq!(px.energy(), 80);
        assert_eq!(px.health(), 90);
        for h in [storm.borrow().snapshot(), logan.borrow().snapshot()] {
            assert_eq!(h.energy, 80);
            assert_eq!(h.health, 90);
            assert_eq!(h.mission_count, 1);
        }
    }

    #[test]
    fn test_tired_leader_leaves_members_untouched() {
        let mut px = professor_x();
        let logan = share(Superhero::new("Wolverine", "Logan", Vec::new()));
        px.add_team_member(logan.clone());
        px.hero_mut().set_stats(29, 100);

        let res = px.lead_mission("Danger Room");
        assert_eq!(res.failure(), Some(FailureReason::TooTired));
        assert_eq!(res.message, "Professor X is too tired to lead a mission...");
        assert_eq!(px.missions_completed(), 0);
        assert_eq!(px.energy(), 29);
        let l = logan.borrow();
        assert_eq!(l.energy(), 100);
        assert_eq!(l.health(), 100);
        assert_eq!(l.mission_count(), 0);
    }

    #[test]
    fn test_leader_at_threshold_can_lead() {
        let mut px = professor_x();
        px.add_team_member(share(Superhero::new("Beast", "Hank McCoy", Vec::new())));
        px.hero_mut().set_stats(30, 100);
        assert!(px.lead_mission("Threshold").is_success());
        assert_eq!(px.energy(), 10);
    }

    #[test]
    fn test_members_drain_to_zero() {
        let mut px = professor_x();
        let rogue = share(Superhero::new("Rogue", "Anna Marie", Vec::new()));
        px.add_team_member(rogue.clone());
        rogue.borrow_mut().hero_mut().set_stats(5, 5);

        assert!(px.lead_mission("Drain").is_success());
        let r = rogue.borrow();
        assert_eq!(r.energy(), 0);
        assert_eq!(r.health(), 0);
    }

    #[test]
    fn test_leader_cannot_join_own_team() {
        let px = share(professor_x());
        let handle: HeroHandle = px.clone();

        let res = px.borrow_mut().add_team_member(handle);
        assert_eq!(res.failure(), Some(FailureReason::SelfMembership));
        assert_eq!(res.message, "Professor X cannot join their own team!");
        assert_eq!(px.borrow().team_size(), 0);
    }

    #[test]
    fn test_leader_can_recruit_another_leader() {
        let mut px = professor_x();
        let cyclops = share(TeamLeader::new("Cyclops", "Scott Summers", Vec::new()));
        assert!(px.add_team_member(cyclops.clone()).is_success());
        assert!(px.lead_mission("Joint op").is_success());
        assert_eq!(cyclops.borrow().mission_count(), 1);
        assert_eq!(cyclops.borrow().missions_completed(), 0);
    }

    #[test]
    fn test_leaders_cannot_recruit_each_other() {
        let px = share(professor_x());
        let cyclops = share(TeamLeader::new("Cyclops", "Scott Summers", Vec::new()));
        let px_handle: HeroHandle = px.clone();
        let cyclops_handle: HeroHandle = cyclops.clone();

        assert!(px.borrow_mut().add_team_member(cyclops_handle).is_success());
        let res = cyclops.borrow_mut().add_team_member(px_handle);
        assert_eq!(res.failure(), Some(FailureReason::CircularTeam));
        assert_eq!(
            res.message,
            "Cyclops cannot recruit Professor X, who already leads them!"
        );
        assert_eq!(cyclops.borrow().team_size(), 0);

        let px_weak = Rc::downgrade(&px);
        let cyclops_weak = Rc::downgrade(&cyclops);
        drop(px);
        drop(cyclops);
        assert!(px_weak.upgrade().is_none());
        assert!(cyclops_weak.upgrade().is_none());
    }

    #[test]
    fn test_nested_leader_chain_cannot_close() {
        let px = share(professor_x());
        let cyclops = share(TeamLeader::new("Cyclops", "Scott Summers", Vec::new()));
        let havok = share(TeamLeader::new("Havok", "Alex Summers", Vec::new()));

        assert!(px.borrow_mut().add_team_member(cyclops.clone()).is_success());
        assert!(cyclops.borrow_mut().add_team_member(havok.clone()).is_success());

        let res = havok.borrow_mut().add_team_member(px.clone());
        assert_eq!(res.failure(), Some(FailureReason::CircularTeam));
        assert_eq!(havok.borrow().team_size(), 0);

        let logan = share(Superhero::new("Wolverine", "Logan", Vec::new()));
        assert!(havok.borrow_mut().add_team_member(logan).is_success());
    }

    #[test]
    fn test_busy_member_blocks_whole_mission() {
        let mut px = professor_x();
        let kitty = share(Superhero::new("Shadowcat", "Kitty Pryde", Vec::new()));
        let piotr = share(Superhero::new("Colossus", "Piotr Rasputin", Vec::new()));
        px.add_team_member(kitty.clone());
        px.add_team_member(piotr.clone());

        let held = piotr.borrow();
        let res = px.lead_mission("Blocked");
        drop(held);

        assert_eq!(res.failure(), Some(FailureReason::MemberUnavailable));
        assert_eq!(px.energy(), 100);
        assert_eq!(px.missions_completed(), 0);
        assert_eq!(kitty.borrow().energy(), 100);
    }

    #[test]
    fn test_busy_recruit_is_refused() {
        let mut px = professor_x();
        let kitty = share(Superhero::new("Shadowcat", "Kitty Pryde", Vec::new()));
        let held = kitty.borrow_mut();
        let res = px.add_team_member(kitty.clone());
        drop(held);
        assert_eq!(res.failure(), Some(FailureReason::MemberUnavailable));
        assert_eq!(px.team_size(), 0);
    }

    #[test]
    fn test_debug_hides_secret_identity() {
        let px = professor_x();
        let out = format!("{:?}", px);
        assert!(out.starts_with("TeamLeader"));
        assert!(out.contains("missions_completed: 0"));
        assert!(!out.contains("Charles Xavier"));
    }

    #[test]
    fn test_snapshot_lists_members() {
        let mut px = professor_x();
        let kurt = share(Superhero::new("Nightcrawler", "Kurt Wagner", Vec::new()));
        let kurt_id = kurt.borrow().id();
        px.add_team_member(kurt);
        assert!(px.is_member(kurt_id));
        match px.snapshot().variant {
            HeroVariantState::Leader { member_ids, .. } => assert_eq!(member_ids, vec![kurt_id]),
            other => panic!("unexpected variant: {:?}", other),
        }
    }
}
