use super::*;

impl RemoteClient {
    pub fn molecular_weight(&self, formula: &str) -> Result<MolecularWeight> {
        self.post_json(
            "/calculate/molecular-weight",
            &serde_json::json!({ "formula": formula }),
            "molecular weight",
        )
    }

    /// `volume_l` is in liters.
    pub fn molarity(&self, moles: f64, volume_l: f64) -> Result<Molarity> {
        self.post_json(
            "/calculate/molarity",
            &serde_json::json!({ "moles": moles, "volume": volume_l }),
            "molarity",
        )
    }

    pub fn ph(&self, h_concentration: f64) -> Result<PhReading> {
        if h_concentration <= 0.0 {
            anyhow::bail!("H+ concentration must be positive");
        }
        self.post_json(
            "/calculate/ph",
            &serde_json::json!({ "h_concentration": h_concentration }),
            "ph",
        )
    }

    pub fn stoichiometry(
        &self,
        reactant_moles: f64,
        reactant_coeff: f64,
        product_coeff: f64,
    ) -> Result<Stoichiometry> {
        self.post_json(
            "/calculate/stoichiometry",
            &serde_json::json!({
                "reactant_moles": reactant_moles,
                "reactant_coeff": reactant_coeff,
                "product_coeff": product_coeff,
            }),
            "stoichiometry",
        )
    }
}
