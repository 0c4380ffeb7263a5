use crate::config::ConnectorConfig;
use crate::connector::Connector;
use crate::error::BindingError;
use crate::node_data::NodeData;
use serde::Serialize;
use wasm_bindgen::prelude::*;

impl From<BindingError> for JsValue {
    fn from(e: BindingError) -> Self {
        JsValue::from_str(&e.to_string())
    }
}

/// Browser entry point used by the workflow canvas.
#[wasm_bindgen]
pub struct WasmConnector {
    connector: Connector,
}

#[wasm_bindgen]
impl WasmConnector {
    /// Accepts an optional `ConnectorConfig`-shaped object.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<WasmConnector, JsValue> {
        console_error_panic_hook::set_once();
        let config = if config.is_undefined() || config.is_null() {
            ConnectorConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config).map_err(BindingError::from)?
        };
        Ok(Self {
            connector: Connector::from_config(&config)?,
        })
    }

    /// Returns `{ fired, rule, applied, child }` with the updated child record.
    #[wasm_bindgen(js_name = mutateNodesForConnection)]
    pub fn mutate_nodes_for_connection(&self, parent: JsValue, child: JsValue) -> Result<JsValue, JsValue> {
        let parent: NodeData = serde_wasm_bindgen::from_value(parent).map_err(BindingError::from)?;
        let child: NodeData = serde_wasm_bindgen::from_value(child).map_err(BindingError::from)?;
        let result = self.connector.connect(parent, child)?;
        let serializer = serde_wasm_bindgen::Serializer::json_compatible();
        Ok(result
            .serialize(&serializer)
            .map_err(BindingError::from)?)
    }

    /// Rule names in evaluation order.
    #[wasm_bindgen(js_name = ruleNames)]
    pub fn rule_names(&self) -> Vec<String> {
        self.connector
            .dispatcher()
            .rules()
            .names()
            .into_iter()
            .map(str::to_string)
            .collect()
    }
}
