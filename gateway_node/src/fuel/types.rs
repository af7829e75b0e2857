//! Typed views of the Fuel GraphQL responses.
//!
//! Responses are decoded into these records and re-serialized verbatim to
//! the HTTP caller. Polymorphic inputs, outputs, and statuses are tagged
//! unions keyed on `__typename`; an unknown variant fails decoding rather
//! than silently dropping fields. Numeric Fuel scalars (U16/U64) arrive
//! as JSON strings and stay strings here.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// GraphQL response envelope as returned by the backend.
#[derive(Debug, Serialize, Deserialize)]
pub struct GraphQlEnvelope<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Value>,
}

/// Generic paginated node list (`first: 5` / `last: 5` selections).
#[derive(Debug, Serialize, Deserialize)]
pub struct NodePage<T> {
    pub nodes: Vec<T>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BalanceData {
    pub balance: BalanceRecord,
}

/// A single owner/asset balance.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceRecord {
    pub owner: String,
    pub amount: String,
    pub asset_id: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BalancesData {
    pub balances: NodePage<AssetBalanceNode>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractBalancesData {
    pub contract_balances: NodePage<AssetBalanceNode>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetBalanceNode {
    pub amount: String,
    pub asset_id: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChainData {
    pub chain: ChainInfo,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChainInfo {
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessagesData {
    pub messages: NodePage<MessageNode>,
}

/// A bridged message addressed to an owner.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageNode {
    pub amount: String,
    pub sender: String,
    pub recipient: String,
    pub nonce: String,
    pub data: String,
    pub da_height: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerTransactionsData {
    pub transactions_by_owner: NodePage<TransactionNode>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LatestTransactionsData {
    pub transactions: NodePage<TransactionNode>,
}

/// One transaction with its polymorphic inputs, outputs, and status.
#[derive(Debug, Serialize, Deserialize)]
pub struct TransactionNode {
    pub id: String,
    pub inputs: Vec<TransactionInput>,
    pub outputs: Vec<TransactionOutput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TransactionStatus>,
}

/// Transaction input variants. Decoding fails closed on a `__typename`
/// this gateway does not know about.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "__typename")]
pub enum TransactionInput {
    #[serde(rename_all = "camelCase")]
    InputCoin {
        owner: String,
        utxo_id: String,
        amount: String,
        asset_id: String,
    },
    #[serde(rename_all = "camelCase")]
    InputContract {
        utxo_id: String,
        contract_id: String,
    },
    InputMessage {
        sender: String,
        recipient: String,
        amount: String,
        data: String,
    },
}

/// Transaction output variants; same fail-closed decoding as inputs.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "__typename")]
pub enum TransactionOutput {
    #[serde(rename_all = "camelCase")]
    CoinOutput {
        to: String,
        amount: String,
        asset_id: String,
    },
    #[serde(rename_all = "camelCase")]
    ContractOutput {
        input_index: String,
        balance_root: String,
        state_root: String,
    },
    #[serde(rename_all = "camelCase")]
    ChangeOutput {
        to: String,
        amount: String,
        asset_id: String,
    },
    #[serde(rename_all = "camelCase")]
    VariableOutput {
        to: String,
        amount: String,
        asset_id: String,
    },
    #[serde(rename_all = "camelCase")]
    ContractCreated { contract: String, state_root: String },
}

/// Execution status. Only `FailureStatus` carries extra fields in the
/// fixed query; the other statuses come back as a bare `__typename`.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "__typename")]
pub enum TransactionStatus {
    SubmittedStatus,
    SuccessStatus,
    SqueezedOutStatus,
    #[serde(rename_all = "camelCase")]
    FailureStatus {
        reason: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        program_state: Option<ProgramState>,
    },
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramState {
    pub return_type: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SubmitData {
    pub submit: SubmittedTransaction,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SubmittedTransaction {
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_known_input_variants() {
        let raw = r#"{
            "id": "0x01",
            "inputs": [
                {"__typename": "InputCoin", "owner": "0xaa", "utxoId": "0x00", "amount": "7", "assetId": "0x0000"},
                {"__typename": "InputContract", "utxoId": "0x01", "contractId": "0xcc"},
                {"__typename": "InputMessage", "sender": "0xaa", "recipient": "0xbb", "amount": "1", "data": "0x"}
            ],
            "outputs": [
                {"__typename": "ChangeOutput", "to": "0xaa", "amount": "3", "assetId": "0x0000"},
                {"__typename": "ContractCreated", "contract": "0xcc", "stateRoot": "0xdd"}
            ],
            "status": {"__typename": "SuccessStatus"}
        }"#;

        let node: TransactionNode = serde_json::from_str(raw).unwrap();
        assert_eq!(node.inputs.len(), 3);
        assert_eq!(node.outputs.len(), 2);
        assert!(matches!(
            node.status,
            Some(TransactionStatus::SuccessStatus)
        ));
    }

    #[test]
    fn unknown_input_variant_fails_closed() {
        let raw = r#"{
            "id": "0x01",
            "inputs": [{"__typename": "InputFuture", "owner": "0xaa"}],
            "outputs": []
        }"#;

        assert!(serde_json::from_str::<TransactionNode>(raw).is_err());
    }

    #[test]
    fn failure_status_keeps_reason_and_program_state() {
        let raw = r#"{
            "__typename": "FailureStatus",
            "reason": "OutOfGas",
            "programState": {"returnType": "REVERT"}
        }"#;

        let status: TransactionStatus = serde_json::from_str(raw).unwrap();
        match status {
            TransactionStatus::FailureStatus {
                reason,
                program_state,
            } => {
                assert_eq!(reason, "OutOfGas");
                assert_eq!(program_state.unwrap().return_type, "REVERT");
            }
            other => panic!("unexpected status: {:?}", other),
        }
    }

    #[test]
    fn envelope_reserializes_without_absent_fields() {
        let raw = r#"{"data":{"balance":{"owner":"0xaa","amount":"10","assetId":"0x0000"}}}"#;
        let envelope: GraphQlEnvelope<BalanceData> = serde_json::from_str(raw).unwrap();
        let echoed = serde_json::to_value(&envelope).unwrap();
        assert_eq!(echoed, serde_json::from_str::<Value>(raw).unwrap());
    }
}
