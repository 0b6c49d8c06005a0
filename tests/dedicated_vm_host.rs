//! Acceptance lifecycle for the core dedicated VM host resource, replayed
//! from a recorded scenario: create with required fields, recreate with
//! optionals, move compartments, update in place, read back through the
//! plural datasource, then import.

use solstice_provider_acctest::replay::{ReplayHarness, Scenario};
use solstice_provider_acctest::representation::{
    GenerationMode, RepMap, RepType, RepValue, Representation, ValuePhase,
};
use solstice_provider_acctest::testing::{
    check_attr, check_attr_set, run_steps, IdCapture, TestError, TestStep, RECREATED_MSG,
};
use solstice_provider_acctest::{
    generate_data_source, generate_resource, get_bool_env_setting, get_env_setting_with_default,
    save_config_content, try_init_logging, variable_str, TerraformState,
};

const RESOURCE_TYPE: &str = "solstice_core_dedicated_vm_host";
const RESOURCE_NAME: &str = "test_dedicated_vm_host";
const RESOURCE_ADDRESS: &str = "solstice_core_dedicated_vm_host.test_dedicated_vm_host";
const DATASOURCE_ADDRESS: &str = "data.solstice_core_dedicated_vm_hosts.test_dedicated_vm_hosts";

const HOST_ID: &str = "ocid1.dedicatedvmhost.sol1..bbbb";
const AVAILABILITY_DOMAIN: &str = "Uocm:US-MERIDIAN-1-AD-1";
const SHAPE: &str = "DVH.Standard.E4.128";

fn compartment_id() -> String {
    get_env_setting_with_default("compartment_ocid", "ocid1.compartment.sol1..aaaa")
}

fn compartment_id_for_update() -> String {
    get_env_setting_with_default(
        "compartment_id_for_update",
        "ocid1.compartment.sol1..cccc",
    )
}

fn variables() -> String {
    let mut out = String::new();
    out.push_str(&variable_str("availability_domain", AVAILABILITY_DOMAIN));
    out.push_str(&variable_str("compartment_id", &compartment_id()));
    out.push_str(&variable_str(
        "compartment_id_for_update",
        &compartment_id_for_update(),
    ));
    out
}

fn host_representation() -> RepMap {
    RepMap::new()
        .with_field(
            "availability_domain",
            Representation::required(RepValue::interp("${var.availability_domain}")),
        )
        .with_field(
            "compartment_id",
            Representation::required(RepValue::interp("${var.compartment_id}")),
        )
        .with_field(
            "dedicated_vm_host_shape",
            Representation::required(RepValue::lit(SHAPE)),
        )
        .with_field(
            "display_name",
            Representation::optional(RepValue::lit("displayName"))
                .with_update(RepValue::lit("displayName2")),
        )
        .with_field(
            "fault_domain",
            Representation::optional(RepValue::lit("FAULT-DOMAIN-3")),
        )
        .with_field(
            "freeform_tags",
            Representation::optional(RepValue::string_map([("Department", "Finance")]))
                .with_update(RepValue::string_map([("Department", "Accounting")])),
        )
}

fn datasource_representation() -> RepMap {
    RepMap::new()
        .with_field(
            "availability_domain",
            Representation::optional(RepValue::interp("${var.availability_domain}")),
        )
        .with_field(
            "compartment_id",
            Representation::required(RepValue::interp("${var.compartment_id_for_update}")),
        )
        .with_field(
            "display_name",
            Representation::optional(RepValue::lit("displayName2")),
        )
        .with_group(
            "filter",
            RepType::Required,
            RepMap::new()
                .with_field("name", Representation::required(RepValue::lit("id")))
                .with_field(
                    "values",
                    Representation::required(RepValue::list([RepValue::interp(
                        "${solstice_core_dedicated_vm_host.test_dedicated_vm_host.id}",
                    )])),
                ),
        )
}

fn host_state(id: &str, compartment: &str, display_name: &str, department: &str) -> TerraformState {
    TerraformState::new().with_resource(
        RESOURCE_ADDRESS,
        [
            ("id", id),
            ("availability_domain", AVAILABILITY_DOMAIN),
            ("compartment_id", compartment),
            ("dedicated_vm_host_shape", SHAPE),
            ("display_name", display_name),
            ("fault_domain", "FAULT-DOMAIN-3"),
            ("freeform_tags.%", "1"),
            ("freeform_tags.Department", department),
            ("lifecycle_state", "ACTIVE"),
            ("time_created", "2021-06-04T18:01:12.000Z"),
        ],
    )
}

fn lifecycle_configs() -> [String; 5] {
    let rep = host_representation();
    let moved_rep = rep.clone().with_properties(RepMap::new().with_field(
        "compartment_id",
        Representation::required(RepValue::interp("${var.compartment_id_for_update}")),
    ));

    let required = variables()
        + &generate_resource(
            RESOURCE_TYPE,
            RESOURCE_NAME,
            GenerationMode::RequiredOnly,
            ValuePhase::Create,
            &rep,
        );
    let create = variables()
        + &generate_resource(
            RESOURCE_TYPE,
            RESOURCE_NAME,
            GenerationMode::WithOptionals,
            ValuePhase::Create,
            &rep,
        );
    let moved = variables()
        + &generate_resource(
            RESOURCE_TYPE,
            RESOURCE_NAME,
            GenerationMode::WithOptionals,
            ValuePhase::Create,
            &moved_rep,
        );
    let updated = variables()
        + &generate_resource(
            RESOURCE_TYPE,
            RESOURCE_NAME,
            GenerationMode::WithOptionals,
            ValuePhase::Update,
            &moved_rep,
        );
    let with_datasource = updated.clone()
        + &generate_data_source(
            "solstice_core_dedicated_vm_hosts",
            "test_dedicated_vm_hosts",
            GenerationMode::WithOptionals,
            ValuePhase::Update,
            &datasource_representation(),
        );

    [required, create, moved, updated, with_datasource]
}

fn recorded_scenario() -> Scenario {
    let [required, create, moved, updated, with_datasource] = lifecycle_configs();
    let compartment = compartment_id();
    let compartment_for_update = compartment_id_for_update();

    let mut datasource_state = host_state(HOST_ID, &compartment_for_update, "displayName2", "Accounting");
    datasource_state.set_attr(DATASOURCE_ADDRESS, "dedicated_vm_hosts.#", "1");
    datasource_state.set_attr(
        DATASOURCE_ADDRESS,
        "dedicated_vm_hosts.0.id",
        HOST_ID,
    );
    datasource_state.set_attr(
        DATASOURCE_ADDRESS,
        "dedicated_vm_hosts.0.display_name",
        "displayName2",
    );
    datasource_state.set_attr(
        DATASOURCE_ADDRESS,
        "dedicated_vm_hosts.0.lifecycle_state",
        "ACTIVE",
    );

    // Required-only create; the service fills in a default display name.
    let required_state = TerraformState::new().with_resource(
        RESOURCE_ADDRESS,
        [
            ("id", "ocid1.dedicatedvmhost.sol1..aaaa"),
            ("availability_domain", AVAILABILITY_DOMAIN),
            ("compartment_id", compartment.as_str()),
            ("dedicated_vm_host_shape", SHAPE),
            ("display_name", "dedicatedVmHost20210604"),
            ("lifecycle_state", "ACTIVE"),
            ("time_created", "2021-06-04T17:58:40.000Z"),
        ],
    );

    Scenario::new("TestCoreDedicatedVmHostResource_basic")
        .with_step(required, required_state)
        .with_step(
            create,
            host_state(HOST_ID, &compartment, "displayName", "Finance"),
        )
        .with_step(
            moved,
            host_state(HOST_ID, &compartment_for_update, "displayName", "Finance"),
        )
        .with_step(
            updated,
            host_state(HOST_ID, &compartment_for_update, "displayName2", "Accounting"),
        )
        .with_step(with_datasource, datasource_state)
}

#[test]
fn test_required_only_config_excludes_optionals() {
    let [required, ..] = lifecycle_configs();
    assert!(required.contains("availability_domain = \"${var.availability_domain}\""));
    assert!(required.contains(&format!("dedicated_vm_host_shape = \"{}\"", SHAPE)));
    assert!(!required.contains("display_name"));
    assert!(!required.contains("fault_domain"));
    assert!(!required.contains("freeform_tags"));
}

#[test]
fn test_update_config_keeps_immutable_fields() {
    let [_, _, _, updated, _] = lifecycle_configs();
    assert!(updated.contains("display_name = \"displayName2\""));
    assert!(updated.contains("freeform_tags = { \"Department\" = \"Accounting\" }"));
    assert!(updated.contains("fault_domain = \"FAULT-DOMAIN-3\""));
}

#[tokio::test]
async fn test_dedicated_vm_host_lifecycle() {
    try_init_logging();
    let [required, create, moved, updated, with_datasource] = lifecycle_configs();
    let compartment = compartment_id();
    let compartment_for_update = compartment_id_for_update();
    let id = IdCapture::new();
    let mut harness = ReplayHarness::new(recorded_scenario());

    // Export the create-with-optionals config; must be exactly the config
    // applied in the create step below.
    save_config_content(&create, "core", "dedicatedVmHost").unwrap();

    // The compartment-membership verification after the move is skippable
    // for tenancies where cross-compartment listing is restricted.
    let mut move_step = TestStep::config(moved).with_check(id.assert_unchanged(RESOURCE_ADDRESS));
    if get_bool_env_setting("enable_export_compartment", true) {
        move_step = move_step.with_check(check_attr(
            RESOURCE_ADDRESS,
            "compartment_id",
            &compartment_for_update,
        ));
    }

    run_steps(
        &mut harness,
        vec![
            // Create with required fields only.
            TestStep::config(required)
                .with_check(check_attr_set(RESOURCE_ADDRESS, "id"))
                .with_check(check_attr(
                    RESOURCE_ADDRESS,
                    "availability_domain",
                    AVAILABILITY_DOMAIN,
                ))
                .with_check(check_attr(RESOURCE_ADDRESS, "compartment_id", &compartment))
                .with_check(check_attr(
                    RESOURCE_ADDRESS,
                    "dedicated_vm_host_shape",
                    SHAPE,
                )),
            // Delete and recreate with every optional field.
            TestStep::config(create)
                .with_check(check_attr(RESOURCE_ADDRESS, "display_name", "displayName"))
                .with_check(check_attr(RESOURCE_ADDRESS, "fault_domain", "FAULT-DOMAIN-3"))
                .with_check(check_attr(
                    RESOURCE_ADDRESS,
                    "freeform_tags.Department",
                    "Finance",
                ))
                .with_check(check_attr_set(RESOURCE_ADDRESS, "time_created"))
                .with_check(id.capture(RESOURCE_ADDRESS)),
            // Move to a different compartment; the host must survive.
            move_step,
            // Update mutable fields in place.
            TestStep::config(updated)
                .with_check(check_attr(RESOURCE_ADDRESS, "display_name", "displayName2"))
                .with_check(check_attr(
                    RESOURCE_ADDRESS,
                    "freeform_tags.Department",
                    "Accounting",
                ))
                .with_check(id.assert_unchanged(RESOURCE_ADDRESS)),
            // Read the host back through the plural datasource.
            TestStep::config(with_datasource)
                .with_check(check_attr(DATASOURCE_ADDRESS, "dedicated_vm_hosts.#", "1"))
                .with_check(check_attr(
                    DATASOURCE_ADDRESS,
                    "dedicated_vm_hosts.0.display_name",
                    "displayName2",
                ))
                .with_check(check_attr(
                    DATASOURCE_ADDRESS,
                    "dedicated_vm_hosts.0.lifecycle_state",
                    "ACTIVE",
                )),
            // Import and verify the state survives a round trip.
            TestStep::import_verify(RESOURCE_ADDRESS),
        ],
    )
    .await
    .unwrap();

    assert_eq!(id.get().as_deref(), Some(HOST_ID));
    assert!(harness.is_exhausted());
}

#[tokio::test]
async fn test_recreated_host_fails_the_update_step() {
    let [_, create, _, updated, _] = lifecycle_configs();
    let compartment = compartment_id();

    // A recording where the update came back with a brand new host id.
    let scenario = Scenario::new("TestCoreDedicatedVmHostResource_recreated")
        .with_step(
            create.clone(),
            host_state(HOST_ID, &compartment, "displayName", "Finance"),
        )
        .with_step(
            updated.clone(),
            host_state(
                "ocid1.dedicatedvmhost.sol1..ffff",
                &compartment_id_for_update(),
                "displayName2",
                "Accounting",
            ),
        );

    let id = IdCapture::new();
    let mut harness = ReplayHarness::new(scenario);

    let err = run_steps(
        &mut harness,
        vec![
            TestStep::config(create).with_check(id.capture(RESOURCE_ADDRESS)),
            TestStep::config(updated).with_check(id.assert_unchanged(RESOURCE_ADDRESS)),
        ],
    )
    .await
    .unwrap_err();

    match err {
        TestError::CheckFailures { step, failures } => {
            assert_eq!(step, 1);
            assert!(failures.iter().any(|f| f.contains(RECREATED_MSG)));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_replay_rejects_drifted_config() {
    let [required, ..] = lifecycle_configs();
    let mut harness = ReplayHarness::new(recorded_scenario());

    let drifted = required.replace(SHAPE, "DVH.Standard.E3.64");
    let err = run_steps(&mut harness, vec![TestStep::config(drifted)])
        .await
        .unwrap_err();

    assert!(format!("{}", err).contains("does not match the recording"));
}
