//! Concept-to-guide index
//!
//! Maps canonical Azure concept names to the static guide page and section
//! that covers them. Matching is bidirectional case-insensitive substring
//! containment, scanned in table order with the first hit winning, so
//! results are deterministic for a fixed table.

use serde::{Deserialize, Serialize};

/// One entry of the embedded guide index
#[derive(Debug, Clone)]
struct GuideEntry {
    key: &'static str,
    file: &'static str,
    section: &'static str,
}

/// A resolved pointer from a concept to a guide section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuideReference {
    /// The concept as submitted by the caller
    pub concept: String,
    /// Guide page filename
    pub guide: String,
    /// Section title within the page
    pub section: String,
}

/// The embedded concept index
#[derive(Debug, Clone)]
pub struct GuideIndex {
    entries: Vec<GuideEntry>,
}

impl GuideIndex {
    /// Build the embedded index, preserving insertion order
    pub fn builtin() -> Self {
        let table: &[(&'static str, &'static str, &'static str)] = &[
            ("Azure AD", "azure_ad_overview.html", "Azure Active Directory"),
            ("Entra ID", "azure_ad_overview.html", "Microsoft Entra ID"),
            ("RBAC", "azure_rbac_guide.html", "Role-Based Access Control"),
            ("Azure Policy", "azure_policy_guide.html", "Azure Policy"),
            ("Management Groups", "azure_management_groups.html", "Management Groups"),
            ("Subscriptions", "azure_subscriptions_guide.html", "Subscriptions"),
            ("Resource Groups", "azure_resource_groups.html", "Resource Groups"),
            ("Storage Accounts", "azure_storage_accounts.html", "Storage Accounts"),
            ("Blob Storage", "azure_blob_storage.html", "Blob Storage"),
            ("Azure Files", "azure_files_guide.html", "Azure Files"),
            ("Storage Replication", "azure_storage_replication.html", "Storage Replication"),
            ("Virtual Machines", "azure_vm_guide.html", "Virtual Machines"),
            ("VM Scale Sets", "azure_vmss_guide.html", "VM Scale Sets"),
            ("Availability Sets", "azure_availability_sets.html", "Availability Sets"),
            ("Azure App Service", "azure_app_service.html", "App Service"),
            ("Azure Container Instances", "azure_aci_guide.html", "Container Instances"),
            ("Azure Kubernetes Service", "azure_aks_guide.html", "AKS"),
            ("Virtual Networks", "azure_vnet_guide.html", "Virtual Networks"),
            ("VNet Peering", "azure_vnet_peering.html", "VNet Peering"),
            ("Network Security Groups", "azure_nsg_guide.html", "NSGs"),
            ("Azure Load Balancer", "azure_load_balancer.html", "Load Balancer"),
            ("Application Gateway", "azure_app_gateway.html", "Application Gateway"),
            ("Azure DNS", "azure_dns_guide.html", "Azure DNS"),
            ("VPN Gateway", "azure_vpn_gateway.html", "VPN Gateway"),
            ("ExpressRoute", "azure_expressroute.html", "ExpressRoute"),
            ("Azure Monitor", "azure_monitor_guide.html", "Azure Monitor"),
            ("Log Analytics", "azure_log_analytics.html", "Log Analytics"),
            ("Azure Backup", "azure_backup_guide.html", "Azure Backup"),
            ("Azure Site Recovery", "azure_site_recovery.html", "Site Recovery"),
            ("Azure Alerts", "azure_alerts_guide.html", "Alerts"),
        ];

        let entries = table
            .iter()
            .map(|&(key, file, section)| GuideEntry { key, file, section })
            .collect();

        Self { entries }
    }

    /// Number of entries in the index
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the index is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve guide references for an ordered list of concepts
    ///
    /// At most one reference per concept; concepts with no hit are dropped
    /// from the result rather than reported.
    pub fn find_references<S: AsRef<str>>(&self, concepts: &[S]) -> Vec<GuideReference> {
        let mut refs = Vec::new();
        for concept in concepts {
            let concept = concept.as_ref();
            let concept_lower = concept.to_lowercase();
            for entry in &self.entries {
                let key_lower = entry.key.to_lowercase();
                if key_lower.contains(&concept_lower) || concept_lower.contains(&key_lower) {
                    refs.push(GuideReference {
                        concept: concept.to_string(),
                        guide: entry.file.to_string(),
                        section: entry.section.to_string(),
                    });
                    break;
                }
            }
        }
        refs
    }
}
