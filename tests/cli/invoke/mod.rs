mod forwards_config_and_environment_contract;
mod requires_service_config_contract;
