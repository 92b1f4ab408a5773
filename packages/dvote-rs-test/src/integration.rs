#[cfg(test)]
mod entity_resolver_tests {
    use dvote_rs::constants::{
        ADDR_INTERFACE_ID, INTERFACE_META_ID, LIST_INTERFACE_ID, TEXT_INTERFACE_ID,
    };

    use crate::{harness::DvoteTestApp, resolver_builder::EntityResolverBuilder};

    const TEXT_KEY: &str = "textKeyA";
    const LIST_KEY: &str = "listA";

    #[test]
    fn sets_a_text_record() {
        let mut harness = DvoteTestApp::setup();

        EntityResolverBuilder::new(&mut harness)
            .build()
            .assert_text(TEXT_KEY, "")
            .set_text(TEXT_KEY, "Text record string 1")
            .assert_text(TEXT_KEY, "Text record string 1");
    }

    #[test]
    fn overrides_a_text_record() {
        let mut harness = DvoteTestApp::setup();

        EntityResolverBuilder::new(&mut harness)
            .with_text(TEXT_KEY, "Text record string 1")
            .build()
            .set_text(TEXT_KEY, "Text record string 2")
            .assert_text(TEXT_KEY, "Text record string 2");
    }

    #[test]
    fn different_entity_cannot_set_text() {
        let mut harness = DvoteTestApp::setup();
        let malicious = harness.account(2);

        let mut resolver = EntityResolverBuilder::new(&mut harness)
            .with_text("name", "Entity")
            .build();

        let entity_id = resolver.entity_id();

        let err = resolver
            .try_set_text(&malicious, &entity_id, "name", "Evil corp")
            .unwrap_err();

        assert!(err.root_cause().to_string().contains("Unauthorized"));

        resolver
            .assert_text("name", "Entity")
            .set_text("name", "Different Entity Name")
            .assert_text("name", "Different Entity Name");
    }

    #[test]
    fn texts_are_scoped_per_entity() {
        let mut harness = DvoteTestApp::setup();
        let other = harness.account(3);

        let mut resolver = EntityResolverBuilder::new(&mut harness)
            .with_text("name", "Entity")
            .build();

        let other_id = resolver.entity_id_of(&other);

        resolver
            .try_set_text(&other, &other_id, "name", "Other entity")
            .unwrap();

        resolver.assert_text("name", "Entity");
        assert_eq!(
            resolver
                .resolver
                .text(&resolver.harness.app.wrap(), &other_id, "name")
                .unwrap(),
            "Other entity"
        );
    }

    #[test]
    fn pushes_and_sets_list_text() {
        let mut harness = DvoteTestApp::setup();

        EntityResolverBuilder::new(&mut harness)
            .build()
            .push_list_text(LIST_KEY, "List record string 1")
            .assert_list(LIST_KEY, &["List record string 1"])
            .set_list_text(LIST_KEY, 0, "List record string 2")
            .assert_list(LIST_KEY, &["List record string 2"]);
    }

    #[test]
    fn list_keeps_append_order() {
        let mut harness = DvoteTestApp::setup();

        let resolver = EntityResolverBuilder::new(&mut harness)
            .with_list(LIST_KEY, &["a", "b", "c", "d"])
            .build();

        assert_eq!(resolver.list(LIST_KEY), vec!["a", "b", "c", "d"]);
        assert_eq!(resolver.list_text(LIST_KEY, 2).unwrap(), "c");
    }

    #[test]
    fn removing_list_index_keeps_remaining_items() {
        let mut harness = DvoteTestApp::setup();

        EntityResolverBuilder::new(&mut harness)
            .with_list(LIST_KEY, &["a", "b", "c", "d"])
            .build()
            .remove_list_index(LIST_KEY, 1)
            .assert_list_items(LIST_KEY, &["a", "c", "d"])
            .remove_list_index(LIST_KEY, 0)
            .assert_list_items(LIST_KEY, &["c", "d"])
            .remove_list_index(LIST_KEY, 1)
            .remove_list_index(LIST_KEY, 0)
            .assert_list(LIST_KEY, &[]);
    }

    #[test]
    fn list_indexes_out_of_range_fail() {
        let mut harness = DvoteTestApp::setup();

        let mut resolver = EntityResolverBuilder::new(&mut harness)
            .with_list(LIST_KEY, &["a"])
            .build();

        let (entity, entity_id) = (resolver.entity.clone(), resolver.entity_id());

        assert!(resolver.list_text(LIST_KEY, 1).is_err());

        let err = resolver
            .try_set_list_text(&entity, &entity_id, LIST_KEY, 1, "b")
            .unwrap_err();
        assert!(err
            .root_cause()
            .to_string()
            .contains("Index 1 is out of range for a list of 1 items"));

        assert!(resolver
            .try_remove_list_index(&entity, &entity_id, "listB", 0)
            .is_err());
    }

    #[test]
    fn different_entity_cannot_write_lists() {
        let mut harness = DvoteTestApp::setup();
        let malicious = harness.account(2);

        let mut resolver = EntityResolverBuilder::new(&mut harness)
            .with_list(LIST_KEY, &["a"])
            .build();

        let entity_id = resolver.entity_id();

        for err in [
            resolver
                .try_push_list_text(&malicious, &entity_id, "listB", "List record string 3")
                .unwrap_err(),
            resolver
                .try_set_list_text(&malicious, &entity_id, LIST_KEY, 0, "Random text")
                .unwrap_err(),
            resolver
                .try_remove_list_index(&malicious, &entity_id, LIST_KEY, 0)
                .unwrap_err(),
        ] {
            assert!(err.root_cause().to_string().contains("Unauthorized"));
        }

        resolver.assert_list(LIST_KEY, &["a"]).assert_list("listB", &[]);
    }

    #[test]
    fn sets_entity_addr() {
        let mut harness = DvoteTestApp::setup();
        let target = harness.account(4);
        let malicious = harness.account(2);

        let mut resolver = EntityResolverBuilder::new(&mut harness).build();
        let entity_id = resolver.entity_id();

        resolver
            .assert_addr(None)
            .set_addr(&target)
            .assert_addr(Some(&target));

        assert!(resolver
            .try_set_addr(&malicious, &entity_id, &malicious)
            .is_err());

        resolver.assert_addr(Some(&target));
    }

    #[test]
    fn answers_supported_interfaces() {
        let mut harness = DvoteTestApp::setup();

        let resolver = EntityResolverBuilder::new(&mut harness).build();

        for interface_id in [
            INTERFACE_META_ID,
            ADDR_INTERFACE_ID,
            TEXT_INTERFACE_ID,
            LIST_INTERFACE_ID,
        ] {
            assert!(resolver.supports_interface(&interface_id));
        }

        assert!(!resolver.supports_interface(&[0xff, 0xff, 0xff, 0xff]));
        assert!(!resolver.supports_interface(&[0x01, 0xff, 0xc9]));
    }

    #[test]
    fn records_belong_to_the_configured_entity_account() {
        let mut harness = DvoteTestApp::setup();
        let default_entity = harness.entity();
        let entity = harness.account(3);

        let mut resolver = EntityResolverBuilder::new(&mut harness)
            .with_entity_account(entity.clone())
            .with_text("name", "Entity 3")
            .build();
        let entity_id = resolver.entity_id();

        assert_eq!(entity_id, resolver.entity_id_of(&entity));
        assert_ne!(entity_id, resolver.entity_id_of(&default_entity));

        assert!(resolver
            .try_set_text(&default_entity, &entity_id, "name", "Other")
            .is_err());

        resolver
            .assert_text("name", "Entity 3")
            .set_text("name", "Entity 3 renamed")
            .assert_text("name", "Entity 3 renamed");
    }

    #[test]
    fn migration_keeps_records() {
        let mut harness = DvoteTestApp::setup();
        let deployer = harness.deployer();
        let stranger = harness.account(2);

        let mut resolver = EntityResolverBuilder::new(&mut harness)
            .with_text(TEXT_KEY, "Text record string 1")
            .with_list(LIST_KEY, &["a", "b"])
            .build();
        let contract = resolver.resolver.address();

        assert!(resolver
            .harness
            .migrate_entity_resolver(&stranger, &contract)
            .is_err());

        resolver
            .harness
            .migrate_entity_resolver(&deployer, &contract)
            .unwrap();

        let version = resolver.harness.contract_version(&contract).unwrap();

        assert_eq!(version.contract, "crates.io:entity-resolver");
        assert_eq!(version.version, "0.1.0");

        resolver
            .assert_text(TEXT_KEY, "Text record string 1")
            .assert_list(LIST_KEY, &["a", "b"]);
    }
}
