mod mock_e2e_contract;
mod prompt_preview_contract;
mod reads_api_key_from_dotenv_contract;
mod rejects_invalid_arguments_contract;
mod rejects_missing_api_key_contract;
mod rejects_missing_gpx_contract;
