mod creates_mutation_resolver_contract;
mod rejects_duplicate_resolver_contract;
mod rejects_existing_artifact_contract;
mod rejects_existing_test_file_contract;
mod rejects_invalid_inputs_contract;
mod requires_manifest_contract;
mod test_path_placeholder_contract;
