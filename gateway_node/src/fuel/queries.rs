//! Fixed GraphQL query texts and the descriptor sent to the Fuel backend.

use serde::Serialize;
use serde_json::Value;

/// One GraphQL request: fixed query text plus the variables that query
/// needs. Built fresh per call and discarded once the call settles.
#[derive(Debug, Serialize)]
pub struct QueryDescriptor<'a> {
    pub query: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<Value>,
}

impl<'a> QueryDescriptor<'a> {
    pub fn new(query: &'a str) -> Self {
        Self {
            query,
            variables: None,
        }
    }

    pub fn with_variables(query: &'a str, variables: Value) -> Self {
        Self {
            query,
            variables: Some(variables),
        }
    }
}

pub const BALANCE: &str = r#"
    query Balance($address: Address, $assetId: AssetId) {
      balance(owner: $address, assetId: $assetId) {
        owner
        amount
        assetId
      }
    }
"#;

pub const BALANCES: &str = r#"
    query Balances($filter: BalanceFilterInput) {
      balances(filter: $filter, first: 5) {
        nodes {
          amount
          assetId
        }
      }
    }
"#;

pub const CHAIN_NAME: &str = r#"
    {
      chain {
        name
      }
    }
"#;

pub const MESSAGES: &str = r#"
    query MessageInfo($address: Address) {
      messages(owner: $address, first: 5) {
        nodes {
          amount
          sender
          recipient
          nonce
          data
          daHeight
        }
      }
    }
"#;

pub const OWNER_TRANSACTIONS: &str = r#"
    query Transactions($address: Address) {
      transactionsByOwner(owner: $address, first: 5) {
        nodes {
          id
          inputs {
            __typename
            ... on InputCoin {
              owner
              utxoId
              amount
              assetId
            }
            ... on InputContract {
              utxoId
              contractId
            }
            ... on InputMessage {
              sender
              recipient
              amount
              data
            }
          }
          outputs {
            __typename
            ... on CoinOutput {
              to
              amount
              assetId
            }
            ... on ContractOutput {
              inputIndex
              balanceRoot
              stateRoot
            }
            ... on ChangeOutput {
              to
              amount
              assetId
            }
            ... on VariableOutput {
              to
              amount
              assetId
            }
            ... on ContractCreated {
              contract
              stateRoot
            }
          }
          status {
            __typename
            ... on FailureStatus {
              reason
              programState {
                returnType
              }
            }
          }
        }
      }
    }
"#;

pub const LATEST_TRANSACTIONS: &str = r#"
    query LatestTransactions {
      transactions(last: 5) {
        nodes {
          id
          inputs {
            __typename
            ... on InputCoin {
              owner
              utxoId
              amount
              assetId
            }
            ... on InputContract {
              utxoId
              contractId
            }
            ... on InputMessage {
              sender
              recipient
              amount
              data
            }
          }
          outputs {
            __typename
            ... on CoinOutput {
              to
              amount
              assetId
            }
            ... on ContractOutput {
              inputIndex
              balanceRoot
              stateRoot
            }
            ... on ChangeOutput {
              to
              amount
              assetId
            }
            ... on VariableOutput {
              to
              amount
              assetId
            }
            ... on ContractCreated {
              contract
              stateRoot
            }
          }
          status {
            __typename
            ... on FailureStatus {
              reason
              programState {
                returnType
              }
            }
          }
        }
      }
    }
"#;

pub const CONTRACT_BALANCES: &str = r#"
    query ContractBalances($filter: ContractBalanceFilterInput!) {
      contractBalances(filter: $filter, first: 5) {
        nodes {
          amount
          assetId
        }
      }
    }
"#;

pub const SUBMIT: &str = r#"
    mutation submit($encodedTransaction: HexString!) {
      submit(tx: $encodedTransaction) {
        id
      }
    }
"#;
