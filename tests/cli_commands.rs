mod harness;

use harness::TestContext;
use predicates::prelude::*;

#[test]
fn list_shows_builtin_roles_without_configuration() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("admin"))
        .stdout(predicate::str::contains("editor"))
        .stdout(predicate::str::contains("default"));
}

#[test]
fn list_json_emits_role_summaries() {
    let ctx = TestContext::new().with_standard_site();

    let output = ctx.cli().args(["list", "--json"]).output().expect("failed to run list");
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            {"id": "admin", "name": "Admin", "isDefault": false, "hasPanelAccess": true},
            {"id": "editor", "name": "Editor", "isDefault": true, "hasPanelAccess": true},
            {"id": "client", "name": "Client", "isDefault": false, "hasPanelAccess": false},
        ])
    );
}

#[test]
fn list_alias_works() {
    let ctx = TestContext::new();
    ctx.cli().arg("ls").assert().success();
}

#[test]
fn check_exit_code_reflects_decision() {
    let ctx = TestContext::new().with_standard_site();

    ctx.cli()
        .args(["check", "editor", "panel.page.create"])
        .assert()
        .success()
        .stdout(predicate::str::contains("granted"));

    ctx.cli()
        .args(["check", "editor", "panel.user.delete"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("denied"));
}

#[test]
fn check_admin_passes_everything_despite_denial() {
    let ctx = TestContext::new().with_standard_site();

    for permission in ["panel.user.delete", "panel.access", "not.a.real.permission"] {
        ctx.cli()
            .args(["check", "admin", permission])
            .assert()
            .success()
            .stdout(predicate::str::contains("granted"));
    }
}

#[test]
fn check_legacy_panel_flag() {
    let ctx = TestContext::new().with_standard_site();

    ctx.cli().args(["check", "client", "panel.access"]).assert().code(1);
    ctx.cli().args(["check", "client", "panel.file.upload"]).assert().success();
}

#[test]
fn check_unknown_role_fails_with_message() {
    let ctx = TestContext::new().with_standard_site();

    ctx.cli()
        .args(["check", "ghost", "panel.access"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Role 'ghost' not found"));
}

#[test]
fn show_prints_permissions_and_users() {
    let ctx = TestContext::new().with_standard_site();

    ctx.cli()
        .args(["show", "editor"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Editor (editor)"))
        .stdout(predicate::str::contains("❌ panel.user.delete"))
        .stdout(predicate::str::contains("✅ panel.page.create"))
        .stdout(predicate::str::contains("panel.plugin.install (custom)"))
        .stdout(predicate::str::contains("• bob"))
        .stdout(predicate::str::contains("• cy"));
}

#[test]
fn show_json_includes_users() {
    let ctx = TestContext::new().with_standard_site();

    let output = ctx.cli().args(["show", "admin", "--json"]).output().expect("failed to run show");
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["id"], "admin");
    assert_eq!(json["superuser"], true);
    assert_eq!(json["users"][0]["username"], "ada");
    assert_eq!(json["users"].as_array().unwrap().len(), 1);
}

#[test]
fn users_lists_exact_role_members() {
    let ctx = TestContext::new().with_standard_site();

    ctx.cli()
        .args(["users", "editor"])
        .assert()
        .success()
        .stdout(predicate::str::contains("bob"))
        .stdout(predicate::str::contains("cy <cy@example.com>"))
        .stdout(predicate::str::contains("ada").not())
        .stdout(predicate::str::contains("dee").not());
}

#[test]
fn root_flag_targets_other_directory() {
    let ctx = TestContext::new().with_standard_site();
    let elsewhere = tempfile::TempDir::new().unwrap();

    ctx.cli()
        .current_dir(elsewhere.path())
        .args(["--root", ctx.site_dir().to_str().unwrap(), "check", "client", "panel.access"])
        .assert()
        .code(1);
}

#[test]
fn site_config_relocates_role_file() {
    let ctx = TestContext::new();
    ctx.write_site_config("[roles]\nfile = \"config/roles.yml\"\n");
    ctx.write_file(
        "config/roles.yml",
        "- id: admin\n  name: Admin\n  default: true\n- id: guest\n  name: Guest\n  permissions: false\n",
    );

    ctx.cli().args(["check", "guest", "panel.access"]).assert().code(1);
}

#[test]
fn site_config_rejects_escaping_paths() {
    let ctx = TestContext::new();
    ctx.write_site_config("[accounts]\ndir = \"../../outside\"\n");

    ctx.cli()
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("escapes the site root"));
}

#[test]
fn role_without_name_fails_catalog() {
    let ctx = TestContext::new();
    ctx.write_roles("- id: admin\n  default: true\n");

    ctx.cli()
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("The role name is missing"));
}

#[test]
fn catalog_without_default_role_fails() {
    let ctx = TestContext::new();
    ctx.write_roles("- id: admin\n  name: Admin\n- id: editor\n  name: Editor\n");

    ctx.cli()
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No default role is configured"));
}

#[test]
fn malformed_roles_file_fails() {
    let ctx = TestContext::new();
    ctx.write_roles("- id: admin\n  name: [Admin\n");

    ctx.cli()
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse"));
}
