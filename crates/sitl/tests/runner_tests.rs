use pico_mission_core::traits::categories;
use pico_mission_core::{GeoPoint, StandardFactory};
use pico_mission_sitl::runner::MAX_COMMAND_LEN;
use pico_mission_sitl::{parse_config, MemorySink, MissionRunner, SimVehicle, SitlError};

const DT: f32 = 0.25;

fn vehicle() -> SimVehicle {
    SimVehicle::new(GeoPoint::new(-93.1523, 45.2184), 290.0)
}

fn runner(config_json: &str) -> MissionRunner<MemorySink> {
    let config = parse_config(config_json).unwrap();
    MissionRunner::with_sink(&config, &StandardFactory, vehicle(), MemorySink::new())
}

const MISSION: &str = r#"{
    "global_tasks": { "mode_manager": {}, "lost_link": {} },
    "sequential_tasks": {
        "preflight": { "params": { "duration_sec": 0.5 } },
        "launch": { "params": { "duration_sec": 0.5 } }
    },
    "standby_tasks": {
        "idle": {},
        "circle-home": { "task": "circle", "nickname": "circle_home" },
        "circle-coord": { "task": "circle", "nickname": "circle_target" },
        "land": { "params": { "duration_sec": 1.0 } },
        "route": {}
    }
}"#;

const ROUTE_MISSION: &str = r#"{
    "sequential_tasks": { "route": {} },
    "standby_tasks": {
        "idle": {},
        "circle-home": { "task": "circle", "nickname": "circle_home" },
        "circle-coord": { "task": "circle", "nickname": "circle_target" },
        "land": { "params": { "duration_sec": 1.0 } }
    }
}"#;

#[test]
fn test_sequence_runs_to_idle() {
    let mut runner = runner(MISSION);
    assert_eq!(runner.stack_names(), ["preflight", "launch"]);

    runner.step(DT);
    runner.step(DT);
    assert_eq!(runner.stack_names(), ["launch"]);

    runner.step(DT);
    runner.step(DT);
    assert_eq!(runner.stack_names(), ["idle"]);

    runner.step(DT);
    assert_eq!(runner.board().current_task, "idle");
    assert_eq!(runner.tick_count(), 5);

    assert_eq!(
        runner.sink().messages(categories::MISSION),
        [
            "task complete: preflight",
            "next task: launch",
            "task complete: launch",
        ]
    );
}

#[test]
fn test_interrupt_and_resume() {
    let mut runner = runner(ROUTE_MISSION);
    runner.step(DT);
    assert_eq!(runner.board().current_task, "route");

    runner.submit("circle").unwrap();
    runner.step(DT);
    assert_eq!(runner.stack_names(), ["circle-coord", "route"]);
    assert_eq!(runner.board().current_task, "circle-coord");
    assert_eq!(runner.board().command_result, "successful: circle");
    assert_eq!(runner.board().circle.target, GeoPoint::new(-93.1523, 45.2184));
    assert!(runner.board().command_request.is_empty());

    runner.submit("task,resume").unwrap();
    runner.step(DT);
    assert_eq!(runner.stack_names(), ["route"]);
    assert_eq!(runner.board().current_task, "route");
    assert_eq!(runner.board().command_result, "successful: task,resume");
}

#[test]
fn test_landing_over_home_circle() {
    let mut runner = runner(ROUTE_MISSION);

    runner.submit("home").unwrap();
    runner.step(DT);
    runner.submit("land").unwrap();
    runner.step(DT);
    assert_eq!(runner.stack_names(), ["land", "circle-home", "route"]);
    assert_eq!(runner.board().landing_heading_deg, Some(290.0));

    // Land ran for one tick already; three more complete it
    for _ in 0..3 {
        runner.step(DT);
    }
    assert_eq!(runner.stack_names(), ["circle-home", "route"]);
    assert_eq!(runner.sink().count(categories::MISSION, "task complete: land"), 1);
    assert_eq!(runner.sink().count(categories::MISSION, "next task: circle-home"), 1);
}

#[test]
fn test_syntax_error_leaves_stack() {
    let mut runner = runner(ROUTE_MISSION);
    runner.step(DT);

    runner.submit("land,north").unwrap();
    runner.step(DT);

    assert_eq!(runner.board().command_result, "syntax error: land,north");
    assert_eq!(runner.stack_names(), ["route"]);
    assert!(!runner.sink().messages(categories::FAULT).is_empty());
}

#[test]
fn test_submit_rejects_long_command() {
    let mut runner = runner(ROUTE_MISSION);
    let long = "x".repeat(MAX_COMMAND_LEN + 1);

    let err = runner.submit(&long).unwrap_err();
    assert!(matches!(err, SitlError::CommandTooLong { len, max } if len == MAX_COMMAND_LEN + 1 && max == MAX_COMMAND_LEN));
    assert!(runner.board().command_request.is_empty());
}

#[test]
fn test_submit_trims_line() {
    let mut runner = runner(ROUTE_MISSION);
    runner.submit("  idle\n").unwrap();
    assert_eq!(runner.board().command_request, "idle");

    runner.step(DT);
    assert_eq!(runner.stack_names(), ["idle", "route"]);
}

#[test]
fn test_unknown_task_skipped() {
    let mut runner = runner(
        r#"{
            "global_tasks": { "warp_drive": {}, "camera": {} },
            "standby_tasks": { "idle": {} }
        }"#,
    );

    assert_eq!(runner.scheduler().pools().global().len(), 1);
    assert_eq!(
        runner
            .sink()
            .count(categories::FAULT, "unknown task name: warp_drive"),
        1
    );

    runner.step(DT);
    assert_eq!(runner.stack_names(), ["idle"]);
}

#[test]
fn test_circle_follows_vehicle_drift() {
    let mut runner = runner(ROUTE_MISSION);
    runner.vehicle_mut().north_mps = 20.0;

    for _ in 0..4 {
        runner.step(DT);
    }
    let drifted = runner.board().position;
    assert!(drifted.lat_deg > 45.2184);

    runner.submit("circle").unwrap();
    runner.step(DT);
    // The vehicle moves before the command is processed
    assert_eq!(runner.board().circle.target, runner.board().position);
    assert!(runner.board().circle.target.lat_deg > drifted.lat_deg);
}

#[test]
fn test_missing_standby_reports_success() {
    let mut runner = runner(r#"{ "sequential_tasks": { "route": {} } }"#);

    runner.submit("calibrate").unwrap();
    runner.step(DT);

    assert_eq!(runner.board().command_result, "successful: calibrate");
    assert_eq!(runner.stack_names(), ["route"]);
    assert_eq!(
        runner.sink().count(
            categories::FAULT,
            "couldn't find standby task with name 'calibrate'"
        ),
        1
    );
}
