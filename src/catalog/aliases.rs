//! Synonym/alias table mapping skill spellings to canonical names

use crate::error::{Result, SkillGapError};
use aho_corasick::AhoCorasick;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Serialized form of the alias table: canonical name -> alias spellings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AliasEntries {
    pub aliases: HashMap<String, Vec<String>>,
}

/// Canonical-name resolution over a static alias vocabulary.
///
/// Holds a reverse alias -> canonical map for direct lookups and an
/// Aho-Corasick automaton over every known spelling so longer free-text
/// labels ("5 years of k8s administration") can surface embedded skills.
pub struct AliasTable {
    canonical_of: HashMap<String, String>,
    patterns: Vec<String>,
    automaton: AhoCorasick,
}

impl AliasTable {
    pub fn with_defaults() -> Result<Self> {
        Self::from_entries(Self::default_entries())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let entries: AliasEntries = toml::from_str(&content)
            .map_err(|e| SkillGapError::Catalog(format!("Failed to parse alias table: {}", e)))?;
        let mut merged = Self::default_entries();
        for (canonical, aliases) in entries.aliases {
            merged
                .aliases
                .entry(canonical)
                .or_default()
                .extend(aliases);
        }
        Self::from_entries(merged)
    }

    pub fn from_entries(entries: AliasEntries) -> Result<Self> {
        let mut canonical_of = HashMap::new();
        for (canonical, aliases) in &entries.aliases {
            let canonical = canonical.trim().to_lowercase();
            canonical_of.insert(canonical.clone(), canonical.clone());
            for alias in aliases {
                canonical_of.insert(alias.trim().to_lowercase(), canonical.clone());
            }
        }

        // Longest spellings first so the automaton prefers "react native"
        // over "react" when both occur at the same position.
        let mut patterns: Vec<String> = canonical_of.keys().cloned().collect();
        patterns.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

        let automaton = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .match_kind(aho_corasick::MatchKind::LeftmostLongest)
            .build(&patterns)
            .map_err(|e| SkillGapError::Catalog(format!("Failed to build alias matcher: {}", e)))?;

        Ok(Self {
            canonical_of,
            patterns,
            automaton,
        })
    }

    /// Resolve a lowercased token to its canonical name, if known.
    pub fn resolve(&self, token: &str) -> Option<&str> {
        self.canonical_of.get(token).map(|s| s.as_str())
    }

    /// Whether the token is itself a canonical name (not merely an alias).
    pub fn is_canonical(&self, token: &str) -> bool {
        self.resolve(token).is_some_and(|c| c == token)
    }

    /// Find known skills embedded inside a longer phrase. Matches are only
    /// accepted on word boundaries so "scala" does not fire inside
    /// "scalability".
    pub fn extract_embedded(&self, phrase: &str) -> Vec<String> {
        let bytes = phrase.as_bytes();
        let mut found = Vec::new();
        for mat in self.automaton.find_iter(phrase) {
            let boundary_before = mat.start() == 0
                || !bytes[mat.start() - 1].is_ascii_alphanumeric();
            let boundary_after = mat.end() == bytes.len()
                || !bytes[mat.end()].is_ascii_alphanumeric();
            if !boundary_before || !boundary_after {
                continue;
            }
            let spelling = self.patterns[mat.pattern().as_usize()].as_str();
            if let Some(canonical) = self.resolve(spelling) {
                if !found.iter().any(|f| f == canonical) {
                    found.push(canonical.to_string());
                }
            }
        }
        found
    }

    pub fn alias_count(&self) -> usize {
        self.canonical_of.len()
    }

    fn default_entries() -> AliasEntries {
        let table: Vec<(&str, Vec<&str>)> = vec![
            ("javascript", vec!["js", "ecmascript", "es6"]),
            ("typescript", vec!["ts"]),
            ("python", vec!["py", "python3"]),
            ("kubernetes", vec!["k8s", "kube"]),
            ("docker", vec!["docker containers"]),
            ("postgresql", vec!["postgres", "psql"]),
            ("mysql", vec![]),
            ("mongodb", vec!["mongo"]),
            ("machine learning", vec!["ml"]),
            ("deep learning", vec!["dl"]),
            ("natural language processing", vec!["nlp"]),
            ("computer vision", vec!["cv"]),
            ("scikit-learn", vec!["sklearn", "scikit learn"]),
            ("tensorflow", vec!["tf"]),
            ("pytorch", vec!["torch"]),
            ("aws", vec!["amazon web services"]),
            ("google cloud", vec!["gcp", "google cloud platform"]),
            ("azure", vec!["microsoft azure"]),
            ("node.js", vec!["node", "nodejs"]),
            ("react", vec!["reactjs", "react.js"]),
            ("react native", vec![]),
            ("vue", vec!["vuejs", "vue.js"]),
            ("angular", vec!["angularjs"]),
            ("next.js", vec!["nextjs"]),
            ("express", vec!["expressjs", "express.js"]),
            ("c++", vec!["cpp"]),
            ("c#", vec!["csharp", "c sharp"]),
            ("go", vec!["golang"]),
            ("rust", vec!["rustlang"]),
            ("ruby", vec!["ruby on rails"]),
            ("rails", vec!["ror"]),
            ("sql", vec!["structured query language"]),
            ("html", vec!["html5"]),
            ("css", vec!["css3"]),
            ("rest api", vec!["rest", "restful", "restful api"]),
            ("graphql", vec!["graph ql"]),
            ("ci/cd", vec!["cicd", "continuous integration", "continuous delivery"]),
            ("infrastructure as code", vec!["iac"]),
            ("terraform", vec![]),
            ("elasticsearch", vec!["elastic search", "es"]),
            ("redis", vec![]),
            ("kafka", vec!["apache kafka"]),
            ("spark", vec!["apache spark", "pyspark"]),
            ("airflow", vec!["apache airflow"]),
            ("pandas", vec![]),
            ("numpy", vec![]),
            ("git", vec!["github", "gitlab", "version control"]),
            ("linux", vec!["unix"]),
            ("bash", vec!["shell scripting", "shell"]),
            ("agile", vec!["agile methodologies"]),
            ("scrum", vec![]),
            ("project management", vec!["pm"]),
            ("problem solving", vec!["problem-solving"]),
            ("communication", vec!["communication skills"]),
            ("leadership", vec!["team leadership"]),
            ("django", vec![]),
            ("flask", vec![]),
            ("fastapi", vec!["fast api"]),
            ("spring boot", vec!["springboot", "spring"]),
            (".net", vec!["dotnet", "dot net", "asp.net"]),
            ("flutter", vec![]),
            ("android", vec!["android development"]),
            ("ios", vec!["ios development"]),
            ("swift", vec![]),
            ("kotlin", vec![]),
            ("tableau", vec![]),
            ("power bi", vec!["powerbi"]),
            ("excel", vec!["microsoft excel", "ms excel"]),
            ("jenkins", vec![]),
            ("ansible", vec![]),
            ("prometheus", vec![]),
            ("grafana", vec![]),
            ("oauth", vec!["oauth2", "oauth 2.0"]),
            ("penetration testing", vec!["pentesting", "pen testing"]),
        ];

        AliasEntries {
            aliases: table
                .into_iter()
                .map(|(canonical, aliases)| {
                    (
                        canonical.to_string(),
                        aliases.into_iter().map(|a| a.to_string()).collect(),
                    )
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_common_aliases() {
        let table = AliasTable::with_defaults().unwrap();
        assert_eq!(table.resolve("js"), Some("javascript"));
        assert_eq!(table.resolve("k8s"), Some("kubernetes"));
        assert_eq!(table.resolve("sklearn"), Some("scikit-learn"));
    }

    #[test]
    fn canonical_names_resolve_to_themselves() {
        let table = AliasTable::with_defaults().unwrap();
        assert_eq!(table.resolve("python"), Some("python"));
        assert!(table.is_canonical("python"));
        assert!(!table.is_canonical("py"));
    }

    #[test]
    fn unknown_tokens_do_not_resolve() {
        let table = AliasTable::with_defaults().unwrap();
        assert_eq!(table.resolve("quantum basket weaving"), None);
    }

    #[test]
    fn extracts_embedded_skills_on_word_boundaries() {
        let table = AliasTable::with_defaults().unwrap();
        let found = table.extract_embedded("5 years of k8s and postgres administration");
        assert!(found.contains(&"kubernetes".to_string()));
        assert!(found.contains(&"postgresql".to_string()));

        // "scala" must not fire inside "scalability"
        let found = table.extract_embedded("focused on scalability work");
        assert!(found.is_empty());
    }

    #[test]
    fn prefers_longest_spelling() {
        let table = AliasTable::with_defaults().unwrap();
        let found = table.extract_embedded("built a react native app");
        assert_eq!(found, vec!["react native".to_string()]);
    }
}
