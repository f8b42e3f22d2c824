//! Tests for the adapter configuration manager.

use super::*;
use crate::network::mock::{MockProvider, ProviderCall};

// ============================================================================
// Test Fixtures
// ============================================================================

fn ethernet() -> AdapterRecord {
    AdapterRecord {
        description: "Intel(R) Ethernet Connection I219-V".to_string(),
        interface: "Ethernet".to_string(),
        dhcp_enabled: true,
        addresses: vec!["192.168.1.23".to_string(), "fe80::1c2d".to_string()],
        subnet_masks: vec!["255.255.255.0".to_string(), "64".to_string()],
        gateways: vec!["192.168.1.1".to_string()],
        dns_servers: vec!["192.168.1.1".to_string()],
    }
}

fn wifi_without_gateway() -> AdapterRecord {
    AdapterRecord {
        description: "Intel(R) Wi-Fi 6 AX201".to_string(),
        interface: "Wi-Fi".to_string(),
        dhcp_enabled: false,
        addresses: vec!["10.0.0.8".to_string()],
        subnet_masks: vec!["255.0.0.0".to_string()],
        gateways: vec![],
        dns_servers: vec![],
    }
}

fn manager() -> AdapterManager<MockProvider> {
    AdapterManager::new(MockProvider::with_adapters(vec![
        ethernet(),
        wifi_without_gateway(),
    ]))
}

fn ethernet_descriptor() -> AdapterDescriptor {
    AdapterDescriptor::new(0, "Intel(R) Ethernet Connection I219-V")
}

fn static_input() -> AdapterConfiguration {
    AdapterConfiguration::static_ip(
        "192.168.1.50",
        "255.255.255.0",
        "192.168.1.1",
        crate::network::parse_dns_list("8.8.8.8 - 8.8.4.4"),
    )
}

mod list_adapters {
    use super::*;

    #[test]
    fn preserves_provider_order() {
        let adapters = manager().list_adapters().unwrap();

        assert_eq!(
            adapters,
            vec![
                AdapterDescriptor::new(0, "Intel(R) Ethernet Connection I219-V"),
                AdapterDescriptor::new(1, "Intel(R) Wi-Fi 6 AX201"),
            ]
        );
    }

    #[test]
    fn keeps_duplicate_descriptions() {
        let manager = AdapterManager::new(MockProvider::with_adapters(vec![
            AdapterRecord::new("TAP-Windows Adapter V9", "Local Area Connection"),
            AdapterRecord::new("TAP-Windows Adapter V9", "Local Area Connection 2"),
        ]));

        let adapters = manager.list_adapters().unwrap();

        assert_eq!(adapters.len(), 2);
        assert_eq!(adapters[0].index, 0);
        assert_eq!(adapters[1].index, 1);
        assert_eq!(adapters[0].description, adapters[1].description);
    }

    #[test]
    fn empty_list_is_not_an_error() {
        let manager = AdapterManager::new(MockProvider::default());

        assert!(manager.list_adapters().unwrap().is_empty());
    }

    #[test]
    fn enumeration_failure_is_unavailable() {
        let manager = manager();
        manager.provider().fail_enumeration("access denied");

        let error = manager.list_adapters().unwrap_err();

        assert!(matches!(error, ManagerError::Unavailable(_)));
        assert!(error.to_string().contains("access denied"));
    }
}

mod read_configuration {
    use super::*;

    #[test]
    fn returns_first_address_mask_and_gateway() {
        let config = manager()
            .read_configuration(&ethernet_descriptor())
            .unwrap();

        assert_eq!(config.mode, AddressingMode::Dhcp);
        assert_eq!(config.address.as_deref(), Some("192.168.1.23"));
        assert_eq!(config.subnet_mask.as_deref(), Some("255.255.255.0"));
        assert_eq!(config.gateway.as_deref(), Some("192.168.1.1"));
        assert_eq!(config.dns_servers, vec!["192.168.1.1"]);
    }

    #[test]
    fn missing_gateway_is_empty() {
        let config = manager()
            .read_configuration(&AdapterDescriptor::new(1, "Intel(R) Wi-Fi 6 AX201"))
            .unwrap();

        assert_eq!(config.gateway, None);
        assert!(config.dns_servers.is_empty());
        assert_eq!(config.mode, AddressingMode::Static);
    }

    #[test]
    fn does_not_issue_change_requests() {
        let manager = manager();

        manager.read_configuration(&ethernet_descriptor()).unwrap();

        assert!(manager.provider().change_calls().is_empty());
    }

    #[test]
    fn vanished_adapter_is_lookup_error() {
        let manager = manager();
        manager.provider().set_adapters(vec![ethernet()]);

        let error = manager
            .read_configuration(&AdapterDescriptor::new(1, "Intel(R) Wi-Fi 6 AX201"))
            .unwrap_err();

        assert!(matches!(error, ManagerError::Lookup { .. }));
    }

    #[test]
    fn reordered_adapter_is_lookup_error() {
        let manager = manager();
        manager
            .provider()
            .set_adapters(vec![wifi_without_gateway(), ethernet()]);

        let error = manager
            .read_configuration(&ethernet_descriptor())
            .unwrap_err();

        assert!(matches!(
            error,
            ManagerError::Lookup { ref descriptor } if descriptor.index == 0
        ));
        assert!(error.to_string().contains("no longer available"));
    }
}

mod apply_dhcp {
    use super::*;

    #[test]
    fn enables_dhcp_and_clears_dns() {
        let manager = manager();

        manager
            .apply_configuration(&ethernet_descriptor(), &AdapterConfiguration::dhcp())
            .unwrap();

        assert_eq!(
            manager.provider().change_calls(),
            vec![
                ProviderCall::EnableAutomatic {
                    interface: "Ethernet".to_string()
                },
                ProviderCall::ClearDns {
                    interface: "Ethernet".to_string()
                },
            ]
        );
    }

    #[test]
    fn applying_twice_succeeds_both_times() {
        let manager = manager();
        let wifi = AdapterDescriptor::new(1, "Intel(R) Wi-Fi 6 AX201");

        assert!(
            manager
                .apply_configuration(&wifi, &AdapterConfiguration::dhcp())
                .is_ok()
        );
        assert!(
            manager
                .apply_configuration(&wifi, &AdapterConfiguration::dhcp())
                .is_ok()
        );

        let adapter = manager.provider().adapter("Wi-Fi").unwrap();
        assert!(adapter.dhcp_enabled);
        assert!(adapter.dns_servers.is_empty());
    }

    #[test]
    fn dns_reset_failure_fails_whole_call() {
        let manager = manager();
        manager
            .provider()
            .set_status(ConfigStep::ClearDnsSearchOrder, 1);

        let error = manager
            .apply_configuration(&ethernet_descriptor(), &AdapterConfiguration::dhcp())
            .unwrap_err();

        match error {
            ManagerError::Configuration { failures } => {
                assert_eq!(
                    failures,
                    vec![StepFailure {
                        step: ConfigStep::ClearDnsSearchOrder,
                        cause: FailureCause::Status(1),
                    }]
                );
            }
            other => panic!("Expected Configuration error, got {other:?}"),
        }
    }

    #[test]
    fn dhcp_ignores_blank_fields() {
        let manager = manager();
        let desired = AdapterConfiguration {
            mode: AddressingMode::Dhcp,
            gateway: Some(String::new()),
            ..AdapterConfiguration::default()
        };

        assert!(
            manager
                .apply_configuration(&ethernet_descriptor(), &desired)
                .is_ok()
        );
    }
}

mod apply_static {
    use super::*;

    #[test]
    fn issues_three_requests_in_order() {
        let manager = manager();

        manager
            .apply_configuration(&ethernet_descriptor(), &static_input())
            .unwrap();

        assert_eq!(
            manager.provider().change_calls(),
            vec![
                ProviderCall::EnableStatic {
                    interface: "Ethernet".to_string(),
                    address: "192.168.1.50".to_string(),
                    subnet_mask: "255.255.255.0".to_string(),
                },
                ProviderCall::SetGateway {
                    interface: "Ethernet".to_string(),
                    gateway: "192.168.1.1".to_string(),
                },
                ProviderCall::SetDns {
                    interface: "Ethernet".to_string(),
                    servers: vec!["8.8.8.8".to_string(), "8.8.4.4".to_string()],
                },
            ]
        );
    }

    #[test]
    fn gateway_failure_fails_whole_call() {
        let manager = manager();
        manager
            .provider()
            .set_status(ConfigStep::SetDefaultGateway, 67);

        let error = manager
            .apply_configuration(&ethernet_descriptor(), &static_input())
            .unwrap_err();

        assert!(matches!(
            &error,
            ManagerError::Configuration { failures }
                if failures.len() == 1 && failures[0].step == ConfigStep::SetDefaultGateway
        ));
        assert!(error.to_string().contains("set default gateway (status 67)"));
    }

    #[test]
    fn failure_does_not_roll_back_or_stop_later_steps() {
        let manager = manager();
        manager
            .provider()
            .set_status(ConfigStep::SetDefaultGateway, 1);

        let _ = manager.apply_configuration(&ethernet_descriptor(), &static_input());

        assert_eq!(manager.provider().change_calls().len(), 3);
        let adapter = manager.provider().adapter("Ethernet").unwrap();
        assert_eq!(adapter.addresses, vec!["192.168.1.50"]);
        assert_eq!(adapter.dns_servers, vec!["8.8.8.8", "8.8.4.4"]);
        assert_eq!(adapter.gateways, vec!["192.168.1.1"]);
    }

    #[test]
    fn unreachable_provider_is_reported_per_step() {
        let manager = manager();
        manager.provider().fail_call(ConfigStep::SetDnsSearchOrder);

        let error = manager
            .apply_configuration(&ethernet_descriptor(), &static_input())
            .unwrap_err();

        assert!(matches!(
            &error,
            ManagerError::Configuration { failures }
                if matches!(failures[0].cause, FailureCause::Unavailable(_))
        ));
    }

    #[test]
    fn blank_gateway_aborts_before_any_call() {
        let manager = manager();
        let mut desired = static_input();
        desired.gateway = Some("  ".to_string());

        let error = manager
            .apply_configuration(&ethernet_descriptor(), &desired)
            .unwrap_err();

        assert!(matches!(
            error,
            ManagerError::Validation(ValidationError::EmptyField(FormField::Gateway))
        ));
        assert!(error.is_user_error());
        assert!(manager.provider().calls().is_empty());
    }

    #[test]
    fn stale_descriptor_issues_no_change_requests() {
        let manager = manager();
        manager.provider().set_adapters(vec![]);

        let error = manager
            .apply_configuration(&ethernet_descriptor(), &static_input())
            .unwrap_err();

        assert!(matches!(error, ManagerError::Lookup { .. }));
        assert!(manager.provider().change_calls().is_empty());
    }
}

mod validation {
    use super::*;

    #[test]
    fn complete_configuration_passes() {
        assert!(validate_static(&static_input()).is_ok());
    }

    #[test]
    fn missing_address_is_reported_first() {
        let mut config = static_input();
        config.address = None;
        config.gateway = None;

        assert_eq!(
            validate_static(&config),
            Err(ValidationError::EmptyField(FormField::Address))
        );
    }

    #[test]
    fn empty_dns_list_is_reported() {
        let mut config = static_input();
        config.dns_servers.clear();

        assert_eq!(
            validate_static(&config),
            Err(ValidationError::EmptyField(FormField::Dns))
        );
    }

    #[test]
    fn whitespace_only_dns_is_reported() {
        let mut config = static_input();
        config.dns_servers = vec!["  ".to_string()];

        assert_eq!(
            validate_static(&config),
            Err(ValidationError::EmptyField(FormField::Dns))
        );
    }

    #[test]
    fn several_blank_dns_entries_are_reported() {
        let mut config = static_input();
        config.dns_servers = vec![" ".to_string(), " ".to_string()];

        assert_eq!(
            validate_static(&config),
            Err(ValidationError::EmptyField(FormField::Dns))
        );
    }
}

#[test]
fn no_selection_is_user_error() {
    assert!(ManagerError::NoSelection.is_user_error());
    assert_eq!(
        ManagerError::NoSelection.to_string(),
        "No network adapter selected"
    );
}
