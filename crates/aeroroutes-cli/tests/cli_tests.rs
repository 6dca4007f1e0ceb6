use assert_cmd::Command;
use predicates::prelude::*;

fn cli() -> Command {
    Command::cargo_bin("aeroroutes-cli").expect("binary builds")
}

#[test]
fn datasets_lists_builtin_graphs() {
    cli()
        .arg("datasets")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("world")
                .and(predicate::str::contains("north-america"))
                .and(predicate::str::contains("campus")),
        );
}

#[test]
fn route_over_north_america_prints_steps() {
    cli()
        .args([
            "route",
            "--dataset",
            "north-america",
            "--from",
            "San Francisco",
            "--to",
            "Miami",
        ])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Route (")
                .and(predicate::str::contains("San Francisco"))
                .and(predicate::str::contains("Miami")),
        );
}

#[test]
fn route_json_output_is_machine_readable() {
    cli()
        .args([
            "route",
            "--dataset",
            "north-america",
            "--from",
            "San Francisco",
            "--to",
            "Miami",
            "--json",
        ])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("\"reachable\": true")
                .and(predicate::str::contains("\"total_length_meters\"")),
        );
}

#[test]
fn unreachable_route_is_a_notice_not_an_error() {
    cli()
        .args([
            "route",
            "--dataset",
            "campus",
            "--from",
            "Tech Tower",
            "--to",
            "Cookout",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("No route between"));
}

#[test]
fn unknown_start_vertex_fails() {
    cli()
        .args([
            "route",
            "--dataset",
            "world",
            "--from",
            "Atlantis",
            "--to",
            "Athens",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not in the graph"));
}

#[test]
fn unknown_dataset_fails() {
    cli()
        .args(["route", "--dataset", "mars", "--from", "A", "--to", "B"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown dataset"));
}

#[test]
fn edges_enumerates_the_overlay() {
    cli()
        .args(["edges", "--dataset", "world"])
        .assert()
        .success()
        .stdout(predicate::str::contains("New York").and(predicate::str::contains("->")));
}
