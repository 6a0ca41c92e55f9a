// tests/planner_scenarios.rs

use mmake::engine::Planner;
use mmake::errors::MmakeError;
use mmake::fs::mock::MockFileSystem;
use mmake::rules::RuleStore;
use mmake::types::BuildOptions;
use mmake_test_utils::builders::{RuleBuilder, RuleStoreBuilder};
use mmake_test_utils::fake_executor::ScriptedExecutor;
use mmake_test_utils::{init_tracing, strings};

const NORMAL: BuildOptions = BuildOptions {
    force_rebuild: false,
    echo_commands: true,
};

const FORCED: BuildOptions = BuildOptions {
    force_rebuild: true,
    echo_commands: true,
};

/// `app: main.o util.o` built with `cc -o app main.o util.o`.
fn app_rules() -> RuleStore {
    RuleStoreBuilder::new()
        .with_rule(
            RuleBuilder::new("app")
                .after_all(&["main.o", "util.o"])
                .command(&["cc", "-o", "app", "main.o", "util.o"])
                .build(),
        )
        .build()
}

fn cc_app() -> Vec<String> {
    strings(&["cc", "-o", "app", "main.o", "util.o"])
}

/// Build `target` once and hand back the result plus the executor's record.
fn build(
    rules: &RuleStore,
    fs: &MockFileSystem,
    options: BuildOptions,
    target: &str,
) -> (Result<(), MmakeError>, ScriptedExecutor) {
    init_tracing();
    let executor = ScriptedExecutor::new(fs.clone());
    let mut planner = Planner::new(rules, fs, executor.clone(), options);
    (planner.ensure_built(target), executor)
}

#[test]
fn app_with_older_objects_is_up_to_date() {
    let fs = MockFileSystem::new();
    fs.add_file("main.o", 10);
    fs.add_file("util.o", 20);
    fs.add_file("app", 30);

    let (result, exec) = build(&app_rules(), &fs, NORMAL, "app");

    assert!(result.is_ok());
    assert!(exec.executed().is_empty());
}

#[test]
fn missing_util_object_without_rule_is_a_lookup_failure() {
    let fs = MockFileSystem::new();
    fs.add_file("main.o", 10);
    fs.add_file("app", 30);

    let (result, exec) = build(&app_rules(), &fs, NORMAL, "app");

    let err = result.unwrap_err();
    assert!(matches!(err, MmakeError::NoRule(ref t) if t == "util.o"));
    assert_eq!(err.to_string(), "A rule for 'util.o' does not exist");
    assert!(exec.executed().is_empty());
}

#[test]
fn newer_util_object_relinks_app_exactly_once() {
    let fs = MockFileSystem::new();
    fs.add_file("main.o", 10);
    fs.add_file("app", 30);
    fs.add_file("util.o", 40);

    let (result, exec) = build(&app_rules(), &fs, NORMAL, "app");

    assert!(result.is_ok());
    assert_eq!(exec.executed(), vec![cc_app()]);
}

#[test]
fn unknown_target_without_file_spawns_nothing() {
    let fs = MockFileSystem::new();

    for options in [NORMAL, FORCED] {
        let (result, exec) = build(&app_rules(), &fs, options, "ghost.c");
        assert!(matches!(result, Err(MmakeError::NoRule(ref t)) if t == "ghost.c"));
        assert!(exec.executed().is_empty());
    }
}

#[test]
fn source_file_without_rule_is_a_fresh_leaf_even_when_forced() {
    let fs = MockFileSystem::new();
    fs.add_file("main.c", 1);

    for options in [NORMAL, FORCED] {
        let (result, exec) = build(&app_rules(), &fs, options, "main.c");
        assert!(result.is_ok());
        assert!(exec.executed().is_empty());
    }
}

#[test]
fn force_rebuilds_an_up_to_date_target() {
    let fs = MockFileSystem::new();
    fs.add_file("main.o", 10);
    fs.add_file("util.o", 20);
    fs.add_file("app", 30);

    let (result, exec) = build(&app_rules(), &fs, FORCED, "app");

    assert!(result.is_ok());
    assert_eq!(exec.executed(), vec![cc_app()]);
}

#[test]
fn equal_timestamps_do_not_trigger_a_rebuild() {
    let fs = MockFileSystem::new();
    fs.add_file("main.o", 30);
    fs.add_file("util.o", 30);
    fs.add_file("app", 30);

    let (result, exec) = build(&app_rules(), &fs, NORMAL, "app");

    assert!(result.is_ok());
    assert!(exec.executed().is_empty());
}

#[test]
fn prerequisite_that_never_materialises_forces_dependent_rebuild() {
    // `stamp` has a rule, but its command does not create the file.
    let rules = RuleStoreBuilder::new()
        .with_rule(RuleBuilder::new("app").after("stamp").command(&["link", "app"]).build())
        .with_rule(RuleBuilder::new("stamp").command(&["echo", "generated"]).build())
        .build();
    let fs = MockFileSystem::new();
    fs.add_file("app", 100);

    let (result, exec) = build(&rules, &fs, NORMAL, "app");

    assert!(result.is_ok());
    assert_eq!(
        exec.executed(),
        vec![strings(&["echo", "generated"]), strings(&["link", "app"])]
    );
}

#[test]
fn unreadable_prerequisite_is_treated_as_stale() {
    let fs = MockFileSystem::new();
    fs.add_file("util.o", 10);
    fs.add_file("app", 30);
    fs.add_unreadable("main.o", "permission denied");

    let (result, exec) = build(&app_rules(), &fs, NORMAL, "app");

    assert!(result.is_ok());
    assert_eq!(exec.executed(), vec![cc_app()]);
}

#[test]
fn second_build_is_a_no_op() {
    let rules = RuleStoreBuilder::new()
        .with_touch_rule("app", &["main.o"])
        .with_touch_rule("main.o", &["main.c"])
        .build();
    let fs = MockFileSystem::new();
    fs.add_file("main.c", 5);

    let (first, exec) = build(&rules, &fs, NORMAL, "app");
    assert!(first.is_ok());
    assert_eq!(exec.rebuilt(), vec!["main.o", "app"]);

    let (second, exec) = build(&rules, &fs, NORMAL, "app");
    assert!(second.is_ok());
    assert!(exec.executed().is_empty());
}

#[test]
fn editing_a_source_rebuilds_only_its_chain() {
    let rules = RuleStoreBuilder::new()
        .with_touch_rule("app", &["main.o", "util.o"])
        .with_touch_rule("main.o", &["main.c"])
        .with_touch_rule("util.o", &["util.c"])
        .build();
    let fs = MockFileSystem::new();
    fs.add_file("main.c", 1);
    fs.add_file("util.c", 2);
    build(&rules, &fs, NORMAL, "app").0.unwrap();

    fs.touch("util.c");
    let (result, exec) = build(&rules, &fs, NORMAL, "app");

    assert!(result.is_ok());
    assert_eq!(exec.rebuilt(), vec!["util.o", "app"]);
}

#[test]
fn failure_two_levels_deep_stops_everything_else() {
    // app -> lib.o -> gen.c (fails), then siblings other.c and main.o.
    let rules = RuleStoreBuilder::new()
        .with_touch_rule("app", &["lib.o", "main.o"])
        .with_touch_rule("lib.o", &["gen.c", "other.c"])
        .with_rule(RuleBuilder::new("gen.c").command(&["false"]).build())
        .with_touch_rule("other.c", &[])
        .with_touch_rule("main.o", &[])
        .build();
    let fs = MockFileSystem::new();

    let (result, exec) = build(&rules, &fs, NORMAL, "app");

    let err = result.unwrap_err();
    assert!(matches!(err, MmakeError::CommandFailed { ref target, .. } if target == "gen.c"));
    assert_eq!(exec.executed(), vec![strings(&["false"])]);
}

#[test]
fn prerequisites_are_built_in_declaration_order() {
    let rules = RuleStoreBuilder::new()
        .with_touch_rule("app", &["zeta.o", "alpha.o", "mid.o"])
        .with_touch_rule("alpha.o", &[])
        .with_touch_rule("mid.o", &[])
        .with_touch_rule("zeta.o", &[])
        .build();
    let fs = MockFileSystem::new();

    let (result, exec) = build(&rules, &fs, NORMAL, "app");

    assert!(result.is_ok());
    assert_eq!(exec.rebuilt(), vec!["zeta.o", "alpha.o", "mid.o", "app"]);
}

#[test]
fn shared_prerequisite_runs_once_per_goal_even_when_forced() {
    let rules = RuleStoreBuilder::new()
        .with_touch_rule("top", &["left", "right"])
        .with_touch_rule("left", &["base"])
        .with_touch_rule("right", &["base"])
        .with_touch_rule("base", &[])
        .build();
    let fs = MockFileSystem::new();

    let (result, exec) = build(&rules, &fs, FORCED, "top");

    assert!(result.is_ok());
    assert_eq!(exec.rebuilt(), vec!["base", "left", "right", "top"]);
}

#[test]
fn goals_run_left_to_right_and_stop_at_first_failure() {
    let rules = RuleStoreBuilder::new()
        .with_touch_rule("first", &[])
        .with_rule(RuleBuilder::new("broken").command(&["false"]).build())
        .with_touch_rule("last", &[])
        .build();
    let fs = MockFileSystem::new();
    let executor = ScriptedExecutor::new(fs.clone());
    let mut planner = Planner::new(&rules, &fs, executor.clone(), NORMAL);

    let result = planner.ensure_goals(&strings(&["first", "broken", "last"]));

    assert!(matches!(result, Err(MmakeError::CommandFailed { .. })));
    assert_eq!(executor.rebuilt(), vec!["first", "false"]);
}

#[test]
fn echo_setting_is_passed_to_the_executor() {
    let rules = RuleStoreBuilder::new()
        .with_touch_rule("a", &["b"])
        .with_touch_rule("b", &[])
        .build();
    let fs = MockFileSystem::new();
    let silent = BuildOptions {
        force_rebuild: false,
        echo_commands: false,
    };

    let (_, exec) = build(&rules, &fs, silent, "a");
    assert_eq!(exec.echo_flags(), vec![false, false]);

    let (_, exec) = build(&rules, &fs, FORCED, "a");
    assert_eq!(exec.echo_flags(), vec![true, true]);
}

#[test]
fn cycle_in_unchecked_store_is_an_error() {
    let rules = RuleStoreBuilder::new()
        .with_touch_rule("a", &["b"])
        .with_touch_rule("b", &["c"])
        .with_touch_rule("c", &["b"])
        .build_unchecked();
    let fs = MockFileSystem::new();

    let (result, exec) = build(&rules, &fs, NORMAL, "a");

    let Err(MmakeError::DependencyCycle(path)) = result else {
        panic!("expected a dependency cycle, got {result:?}");
    };
    assert_eq!(path, vec!["b", "c", "b"]);
    assert!(exec.executed().is_empty());
}
