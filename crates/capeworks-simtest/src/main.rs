//! Capeworks Headless Scenario Harness
//!
//! Runs the demonstration script for heroes and vehicles, prints every
//! status line, and checks the entity invariants along the way.
//! Runs entirely in-process, with no storage or networking.
//!
//! Usage:
//!   cargo run -p capeworks-simtest
//!   cargo run -p capeworks-simtest -- --verbose
//!   cargo run -p capeworks-simtest -- --json
//!   RUST_LOG=debug cargo run -p capeworks-simtest

use std::cell::RefCell;
use std::rc::Rc;

use capeworks_logic::boat::Boat;
use capeworks_logic::car::Car;
use capeworks_logic::constants::stats;
use capeworks_logic::flying::FlyingHero;
use capeworks_logic::hero::{HeroCapability, Superhero};
use capeworks_logic::outcome::{ActionResult, FailureReason};
use capeworks_logic::plane::Plane;
use capeworks_logic::power::Power;
use capeworks_logic::snapshot::{HeroSnapshot, VehicleSnapshot};
use capeworks_logic::team::TeamLeader;
use capeworks_logic::validation::{validate_hero, validate_plane, validate_vehicle};
use capeworks_logic::vehicle::VehicleCapability;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

/// Seed for the randomized hero sweep.
const SWEEP_SEED: u64 = 42;
const SWEEP_STEPS: usize = 5_000;

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

/// Final entity state, dumped with `--json`.
#[derive(Serialize)]
struct Report {
    heroes: Vec<HeroSnapshot>,
    vehicles: Vec<VehicleSnapshot>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let verbose = std::env::args().any(|a| a == "--verbose");
    let json = std::env::args().any(|a| a == "--json");
    println!("=== Capeworks Scenario Harness ===\n");

    let mut results = Vec::new();
    let mut report = Report {
        heroes: Vec::new(),
        vehicles: Vec::new(),
    };

    // 1. Parameter validation for the demo roster
    results.extend(validate_parameters());

    // 2. Hero demo script
    results.extend(run_hero_script(&mut report));

    // 3. Vehicle demo script
    results.extend(run_vehicle_script(&mut report));

    // 4. Randomized clamping sweep
    results.extend(sweep_hero_invariants(verbose));

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed, total, failed
    );

    if json {
        match serde_json::to_string_pretty(&report) {
            Ok(dump) => println!("{}", dump),
            Err(e) => log::error!("failed to serialize report: {}", e),
        }
    }

    if failed > 0 {
        std::process::exit(1);
    }
}

/// Print a status line and hand the result back for checking.
fn say(res: ActionResult) -> ActionResult {
    println!("  {}", res);
    res
}

fn check(name: &str, passed: bool, detail: impl Into<String>) -> TestResult {
    TestResult {
        name: name.into(),
        passed,
        detail: detail.into(),
    }
}

fn flight() -> Power {
    Power::new("Flight", "Ability to fly", 8)
}

fn super_strength() -> Power {
    Power::new("Super Strength", "Enhanced physical strength", 9)
}

fn telepathy() -> Power {
    Power::new("Telepathy", "Read and control minds", 7)
}

// ── 1. Parameters ───────────────────────────────────────────────────────

fn validate_parameters() -> Vec<TestResult> {
    println!("--- Parameters ---");
    let mut results = Vec::new();

    let hero_errors = validate_hero("Superman", &[flight(), super_strength()], Some(10000.0));
    let leader_errors = validate_hero("Professor X", &[telepathy()], None);
    results.push(check(
        "params_heroes_valid",
        hero_errors.is_empty() && leader_errors.is_empty(),
        format!("{} hero errors", hero_errors.len() + leader_errors.len()),
    ));

    let mut vehicle_errors = validate_vehicle("Roadster", 220.0);
    vehicle_errors.extend(validate_plane("Skyhawk", 300.0, 4000.0));
    vehicle_errors.extend(validate_vehicle("Seahorse", 45.0));
    results.push(check(
        "params_vehicles_valid",
        vehicle_errors.is_empty(),
        vehicle_errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; "),
    ));

    results
}

// ── 2. Heroes ───────────────────────────────────────────────────────────

fn run_hero_script(report: &mut Report) -> Vec<TestResult> {
    println!("--- Heroes ---");
    let mut results = Vec::new();

    let superman = Rc::new(RefCell::new(FlyingHero::new(
        "Superman",
        "Clark Kent",
        vec![flight(), super_strength()],
        10000.0,
    )));
    let mut professor_x = TeamLeader::new("Professor X", "Charles Xavier", vec![telepathy()]);

    let empty = say(professor_x.lead_mission("Recon"));
    results.push(check(
        "hero_empty_team_refused",
        empty.failure() == Some(FailureReason::NoTeamMembers)
            && professor_x.missions_completed() == 0,
        "lead_mission with no members is refused",
    ));

    let fly = say(superman.borrow_mut().fly(5000.0));
    results.push(check(
        "hero_fly",
        fly.is_success() && superman.borrow().energy() == 85 && superman.borrow().is_flying(),
        format!("energy after flight = {}", superman.borrow().energy()),
    ));

    let too_high = say(superman.borrow_mut().fly(20000.0));
    results.push(check(
        "hero_fly_ceiling",
        too_high.failure() == Some(FailureReason::AltitudeOutOfRange)
            && superman.borrow().energy() == 85,
        "flight above ceiling refused without cost",
    ));

    let strength = say(superman.borrow_mut().use_power("super strength"));
    results.push(check(
        "hero_use_power",
        strength.is_success() && superman.borrow().energy() == 75,
        format!("energy after power = {}", superman.borrow().energy()),
    ));

    let missing = say(superman.borrow_mut().use_power("Telepathy"));
    results.push(check(
        "hero_missing_power",
        missing.failure() == Some(FailureReason::PowerNotFound),
        "unknown power refused",
    ));

    let land = say(superman.borrow_mut().land());
    results.push(check(
        "hero_land",
        land.is_success() && !superman.borrow().is_flying() && superman.borrow().energy() == 75,
        "landing costs nothing",
    ));

    let joined = say(professor_x.add_team_member(superman.clone()));
    let again = say(professor_x.add_team_member(superman.clone()));
    results.push(check(
        "hero_join_once",
        joined.is_success()
            && again.failure() == Some(FailureReason::AlreadyMember)
            && professor_x.team_size() == 1,
        format!("team size = {}", professor_x.team_size()),
    ));

    let logan = Rc::new(RefCell::new(Superhero::new("Wolverine", "Logan", Vec::new())));
    say(professor_x.add_team_member(logan.clone()));

    let mission = say(professor_x.lead_mission("Save the City"));
    let (s_energy, s_health) = {
        let s = superman.borrow();
        (s.energy(), s.health())
    };
    results.push(check(
        "hero_mission_costs",
        mission.is_success()
            && professor_x.missions_completed() == 1
            && professor_x.energy() == 80
            && s_energy == 55
            && s_health == 90
            && logan.borrow().mission_count() == 1,
        format!("superman energy={} health={}", s_energy, s_health),
    ));

    let rest = say(superman.borrow_mut().rest());
    results.push(check(
        "hero_rest",
        rest.is_success() && superman.borrow().energy() == 85 && superman.borrow().health() == 100,
        rest.message.clone(),
    ));

    let leader = Rc::new(RefCell::new(professor_x));
    let self_join = say(leader.borrow_mut().add_team_member(leader.clone()));
    results.push(check(
        "hero_no_self_join",
        self_join.failure() == Some(FailureReason::SelfMembership),
        "leader cannot join their own team",
    ));

    report.heroes.push(superman.borrow().snapshot());
    report.heroes.push(logan.borrow().snapshot());
    report.heroes.push(leader.borrow().snapshot());

    results
}

// ── 3. Vehicles ─────────────────────────────────────────────────────────

fn run_vehicle_script(report: &mut Report) -> Vec<TestResult> {
    println!("--- Vehicles ---");
    let mut results = Vec::new();

    let mut car = Car::new("Roadster", 220.0, "petrol");
    let cold = say(car.start_moving());
    say(car.start_engine());
    let driving = say(car.start_moving());
    say(car.accelerate(120.0));
    let capped = say(car.accelerate(150.0));
    results.push(check(
        "car_engine_and_cap",
        cold.failure() == Some(FailureReason::EngineOff)
            && driving.is_success()
            && capped.failure() == Some(FailureReason::SpeedOutOfRange)
            && car.current_speed() == 120.0,
        format!("speed = {} km/h", car.current_speed()),
    ));
    say(car.stop());
    results.push(check(
        "car_stop",
        !car.is_moving() && car.current_speed() == 0.0,
        "car stopped",
    ));

    let mut plane = Plane::new("Skyhawk", 300.0, 4000.0);
    say(plane.start_moving());
    say(plane.accelerate(250.0));
    say(plane.climb(3500.0));
    let cruise = say(plane.start_moving());
    let airborne_stop = say(plane.stop());
    results.push(check(
        "plane_no_stop_in_air",
        cruise.is_success()
            && airborne_stop.failure() == Some(FailureReason::Airborne)
            && plane.current_speed() == 250.0,
        "stop refused while airborne",
    ));
    say(plane.land());
    let taxi = plane.is_moving();
    let grounded_stop = say(plane.stop());
    results.push(check(
        "plane_land_then_stop",
        taxi && grounded_stop.is_success() && !plane.is_moving(),
        "landing keeps the plane taxiing until stopped",
    ));

    let mut boat = Boat::new("Seahorse", 45.0, "sailboat");
    let anchored = say(boat.start_moving());
    say(boat.raise_anchor());
    let sailing = say(boat.start_moving());
    say(boat.stop());
    say(boat.drop_anchor());
    results.push(check(
        "boat_anchor",
        anchored.failure() == Some(FailureReason::AnchorDropped)
            && sailing.is_success()
            && !boat.is_moving()
            && boat.anchor_dropped(),
        "boat sails only with the anchor up",
    ));

    report.vehicles.push(car.snapshot());
    report.vehicles.push(plane.snapshot());
    report.vehicles.push(boat.snapshot());

    results
}

// ── 4. Randomized sweep ─────────────────────────────────────────────────

fn sweep_hero_invariants(verbose: bool) -> Vec<TestResult> {
    println!("--- Invariant Sweep ---");
    let mut rng = StdRng::seed_from_u64(SWEEP_SEED);

    let flyer = Rc::new(RefCell::new(FlyingHero::new(
        "Starfire",
        "Koriand'r",
        vec![flight(), super_strength()],
        8000.0,
    )));
    let mut leader = TeamLeader::new("Nightwing", "Dick Grayson", Vec::new());
    leader.add_team_member(flyer.clone());

    let mut violations = 0usize;
    let mut successes = 0usize;
    for _ in 0..SWEEP_STEPS {
        let res = match rng.gen_range(0..5) {
            0 => flyer.borrow_mut().use_power("flight"),
            1 => flyer.borrow_mut().rest(),
            2 => {
                let alt = rng.gen_range(-1000.0..12000.0);
                flyer.borrow_mut().fly(alt)
            }
            3 => flyer.borrow_mut().land(),
            _ => {
                if rng.gen_bool(0.5) {
                    leader.rest();
                }
                leader.lead_mission("Patrol")
            }
        };
        if res.is_success() {
            successes += 1;
        }

        let f = flyer.borrow();
        let in_range = |v: u32| (stats::MIN..=stats::MAX).contains(&v);
        if !(in_range(f.energy())
            && in_range(f.health())
            && in_range(leader.energy())
            && in_range(leader.health()))
        {
            violations += 1;
        }
    }

    if verbose {
        println!(
            "  {} steps, {} succeeded, {} missions led",
            SWEEP_STEPS,
            successes,
            leader.missions_completed()
        );
    }

    vec![check(
        "sweep_stats_clamped",
        violations == 0,
        format!("{} violations in {} steps", violations, SWEEP_STEPS),
    )]
}
