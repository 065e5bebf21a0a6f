//! Local keyword extraction
//!
//! An ordered list of recognized Azure terms scanned against submitted
//! text by case-insensitive substring containment. No tokenization or
//! stemming; the result is a pure function of the input and the table.

/// The embedded keyword table
#[derive(Debug, Clone)]
pub struct KeywordList {
    terms: Vec<&'static str>,
}

impl KeywordList {
    /// Build the embedded keyword list, order preserved
    pub fn builtin() -> Self {
        let terms = vec![
            "Azure AD", "Entra ID", "RBAC", "Azure Policy", "Management Groups",
            "Subscriptions", "Resource Groups", "Storage Accounts", "Blob Storage",
            "Azure Files", "File Sync", "Storage Replication", "LRS", "ZRS", "GRS",
            "Virtual Machines", "VM Scale Sets", "Availability Sets", "Availability Zones",
            "App Service", "Container Instances", "ACI", "Kubernetes", "AKS",
            "Virtual Networks", "VNet", "VNet Peering", "NSG", "Network Security Groups",
            "Load Balancer", "Application Gateway", "Azure DNS", "VPN Gateway",
            "ExpressRoute", "Azure Monitor", "Log Analytics", "Azure Backup",
            "Site Recovery", "Alerts", "Action Groups", "Metrics", "Diagnostic Settings",
            "ARM Templates", "Bicep", "Azure CLI", "PowerShell", "Cloud Shell",
            "Service Principal", "Managed Identity", "Key Vault", "SAS Token",
            "Access Tier", "Hot", "Cool", "Archive", "Lifecycle Management",
            "Private Endpoints", "Service Endpoints", "Azure Firewall", "WAF",
            "Traffic Manager", "Front Door", "CDN", "Azure Bastion",
        ];

        Self { terms }
    }

    /// Number of recognized terms
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Whether the list is empty
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Extract recognized terms appearing in the text
    ///
    /// Returns the matching subset of the table in definition order,
    /// de-duplicated.
    pub fn extract(&self, text: &str) -> Vec<String> {
        let text_lower = text.to_lowercase();
        let mut found = Vec::new();
        for term in &self.terms {
            if text_lower.contains(&term.to_lowercase()) && !found.iter().any(|f| f == term) {
                found.push(term.to_string());
            }
        }
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_is_case_insensitive() {
        let keywords = KeywordList::builtin();
        let found = keywords.extract("configure VNET PEERING between two vnets");
        assert!(found.contains(&"VNet Peering".to_string()));
        assert!(found.contains(&"VNet".to_string()));
    }

    #[test]
    fn test_extract_preserves_definition_order() {
        let keywords = KeywordList::builtin();
        let found = keywords.extract("The quiz covered Azure Backup before RBAC was mentioned.");
        // Table order, not text order: RBAC is defined before Azure Backup.
        assert_eq!(found, vec!["RBAC".to_string(), "Azure Backup".to_string()]);
    }

    #[test]
    fn test_extract_is_idempotent() {
        let keywords = KeywordList::builtin();
        let text = "NSG rules, VNet Peering, and Key Vault secrets, plus more NSG rules";
        let first = keywords.extract(text);
        let second = keywords.extract(text);
        assert_eq!(first, second);
        // De-duplicated despite repeated mentions
        assert_eq!(first.iter().filter(|t| t.as_str() == "NSG").count(), 1);
    }

    #[test]
    fn test_extract_no_match_returns_empty() {
        let keywords = KeywordList::builtin();
        assert!(keywords.extract("nothing about clouds here").is_empty());
        assert!(keywords.extract("").is_empty());
    }
}
