//! Tests for the configuration form.

use super::*;

fn filled() -> FormValues {
    FormValues {
        address: "192.168.1.50".to_string(),
        subnet_mask: "255.255.255.0".to_string(),
        gateway: "192.168.1.1".to_string(),
        dns: "8.8.8.8 - 8.8.4.4".to_string(),
    }
}

fn static_form() -> ConfigForm {
    let mut form = ConfigForm::new(filled());
    form.select_mode(AddressingMode::Static);
    form
}

mod state_machine {
    use super::*;

    #[test]
    fn starts_in_dhcp_mode() {
        let form = ConfigForm::new(filled());

        assert_eq!(form.mode(), AddressingMode::Dhcp);
        assert!(!form.is_editable());
    }

    #[test]
    fn selecting_static_makes_fields_editable() {
        let form = static_form();

        assert_eq!(form.mode(), AddressingMode::Static);
        assert!(form.is_editable());
    }

    #[test]
    fn select_mode_reports_change() {
        let mut form = ConfigForm::default();

        assert!(form.select_mode(AddressingMode::Static));
        assert!(!form.select_mode(AddressingMode::Static));
        assert!(form.select_mode(AddressingMode::Dhcp));
    }

    #[test]
    fn static_dhcp_static_preserves_text() {
        let mut form = static_form();
        form.insert_char(FormField::Address, '7');

        form.select_mode(AddressingMode::Dhcp);
        assert_eq!(form.value(FormField::Address), "192.168.1.507");

        form.select_mode(AddressingMode::Static);
        assert_eq!(form.value(FormField::Address), "192.168.1.507");
        assert_eq!(form.value(FormField::Dns), "8.8.8.8 - 8.8.4.4");
    }
}

mod editing {
    use super::*;

    #[test]
    fn typing_is_ignored_in_dhcp_mode() {
        let mut form = ConfigForm::new(filled());

        assert!(!form.insert_char(FormField::Gateway, '9'));
        assert!(!form.backspace(FormField::Gateway));
        assert_eq!(form.value(FormField::Gateway), "192.168.1.1");
    }

    #[test]
    fn typing_appends_in_static_mode() {
        let mut form = static_form();

        assert!(form.backspace(FormField::Gateway));
        assert!(form.insert_char(FormField::Gateway, '4'));
        assert_eq!(form.value(FormField::Gateway), "192.168.1.4");
    }

    #[test]
    fn control_characters_are_rejected() {
        let mut form = static_form();

        assert!(!form.insert_char(FormField::Address, '\n'));
        assert_eq!(form.value(FormField::Address), "192.168.1.50");
    }

    #[test]
    fn backspace_on_empty_field_does_nothing() {
        let mut form = ConfigForm::default();
        form.select_mode(AddressingMode::Static);

        assert!(!form.backspace(FormField::Dns));
    }
}

mod loading {
    use super::*;

    #[test]
    fn load_replaces_text_and_formats_dns() {
        let mut form = ConfigForm::default();
        let config = AdapterConfiguration {
            mode: AddressingMode::Static,
            address: Some("10.0.0.5".to_string()),
            subnet_mask: Some("255.0.0.0".to_string()),
            gateway: Some("10.0.0.1".to_string()),
            dns_servers: vec!["1.1.1.1".to_string(), "9.9.9.9".to_string()],
        };

        form.load(&config);

        assert_eq!(form.value(FormField::Address), "10.0.0.5");
        assert_eq!(form.value(FormField::SubnetMask), "255.0.0.0");
        assert_eq!(form.value(FormField::Gateway), "10.0.0.1");
        assert_eq!(form.value(FormField::Dns), "1.1.1.1 - 9.9.9.9");
    }

    #[test]
    fn absent_values_load_as_empty_text() {
        let mut form = ConfigForm::new(filled());
        let config = AdapterConfiguration {
            address: Some("10.0.0.5".to_string()),
            ..AdapterConfiguration::default()
        };

        form.load(&config);

        assert_eq!(form.value(FormField::Gateway), "");
        assert_eq!(form.value(FormField::Dns), "");
    }

    #[test]
    fn load_keeps_selected_mode() {
        let mut form = static_form();

        form.load(&AdapterConfiguration::dhcp());

        assert_eq!(form.mode(), AddressingMode::Static);
    }

    #[test]
    fn clear_empties_all_fields() {
        let mut form = ConfigForm::new(filled());

        form.clear();

        for field in FormField::ALL {
            assert_eq!(form.value(field), "");
        }
    }
}

mod desired {
    use super::*;

    #[test]
    fn dhcp_mode_ignores_field_text() {
        let mut form = ConfigForm::default();
        form.clear();

        assert_eq!(form.desired().unwrap(), AdapterConfiguration::dhcp());
    }

    #[test]
    fn static_mode_parses_dns_list() {
        let config = static_form().desired().unwrap();

        assert_eq!(config.mode, AddressingMode::Static);
        assert_eq!(config.address.as_deref(), Some("192.168.1.50"));
        assert_eq!(config.subnet_mask.as_deref(), Some("255.255.255.0"));
        assert_eq!(config.gateway.as_deref(), Some("192.168.1.1"));
        assert_eq!(config.dns_servers, vec!["8.8.8.8", "8.8.4.4"]);
    }

    #[test]
    fn blank_gateway_is_named() {
        let mut values = filled();
        values.gateway = "   ".to_string();
        let mut form = ConfigForm::new(values);
        form.select_mode(AddressingMode::Static);

        assert_eq!(
            form.desired(),
            Err(ValidationError::EmptyField(FormField::Gateway))
        );
    }

    #[test]
    fn first_blank_field_wins() {
        let mut form = ConfigForm::default();
        form.select_mode(AddressingMode::Static);

        assert_eq!(
            form.desired(),
            Err(ValidationError::EmptyField(FormField::Address))
        );
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let mut values = filled();
        values.address = "  192.168.1.60 ".to_string();
        let mut form = ConfigForm::new(values);
        form.select_mode(AddressingMode::Static);

        let config = form.desired().unwrap();

        assert_eq!(config.address.as_deref(), Some("192.168.1.60"));
    }

    #[test]
    fn malformed_values_pass_through() {
        let mut values = filled();
        values.address = "not-an-ip".to_string();
        let mut form = ConfigForm::new(values);
        form.select_mode(AddressingMode::Static);

        assert_eq!(form.desired().unwrap().address.as_deref(), Some("not-an-ip"));
    }
}

#[test]
fn field_display_names_are_lowercase() {
    assert_eq!(FormField::Gateway.to_string(), "gateway");
    assert_eq!(FormField::SubnetMask.to_string(), "subnet mask");
}

#[test]
fn validation_error_names_field() {
    let error = ValidationError::EmptyField(FormField::Gateway);
    assert_eq!(error.to_string(), "The gateway field cannot be empty");
}
