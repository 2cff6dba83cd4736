use std::{collections::HashMap, path::Path, rc::Rc};

use serde::{Deserialize, Serialize};

use crate::model::{Coordinate, ParseError};

/// One node of a resolved dependency tree.
///
/// Children are reference counted so a dependency reached through several
/// parents is one shared node rather than one copy per path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyNode {
    pub coordinate: Coordinate,
    pub children: Vec<Rc<DependencyNode>>,
}

impl DependencyNode {
    pub fn leaf(coordinate: Coordinate) -> Self {
        DependencyNode {
            coordinate,
            children: Vec::new(),
        }
    }

    pub fn new(coordinate: Coordinate, children: Vec<DependencyNode>) -> Self {
        DependencyNode {
            coordinate,
            children: children.into_iter().map(Rc::new).collect(),
        }
    }

    pub fn shared(coordinate: Coordinate, children: Vec<Rc<DependencyNode>>) -> Self {
        DependencyNode {
            coordinate,
            children,
        }
    }
}

/// Resolved dependency graph as written by the build tool's resolver.
///
/// The graph is stored as a flat list of entries, each naming its children by
/// coordinate. [`GraphFile::to_tree`] materializes it starting from `root`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GraphFile {
    pub root: Coordinate,
    #[serde(default)]
    pub dependencies: Vec<GraphEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GraphEntry {
    pub coordinate: Coordinate,
    #[serde(default)]
    pub dependencies: Vec<Coordinate>,
}

const VERSION: i64 = 1;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
struct VersionedGraphFile<'a> {
    pub version: i64,
    #[serde(flatten)]
    pub content: &'a GraphFile,
}

impl GraphFile {
    pub fn from_file(file: &Path) -> Result<GraphFile, ParseError> {
        GraphFile::from_str(&std::fs::read_to_string(file)?)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Result<GraphFile, ParseError> {
        let mut table = toml::from_str::<toml::Table>(s)?;
        match table.remove("version") {
            Some(toml::Value::Integer(VERSION)) => {
                let graph = table.try_into::<GraphFile>()?;
                graph.children_by_coordinate()?;
                Ok(graph)
            }
            Some(other) => Err(ParseError::UnsupportedGraphVersion(other)),
            None => Err(ParseError::MissingKey("version".to_string())),
        }
    }

    pub fn to_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&VersionedGraphFile {
            version: VERSION,
            content: self,
        })
    }

    /// Children listed on the root entry, in file order.
    pub fn direct_dependencies(&self) -> Vec<Coordinate> {
        self.dependencies
            .iter()
            .find(|entry| entry.coordinate == self.root)
            .map(|entry| entry.dependencies.clone())
            .unwrap_or_default()
    }

    /// Materializes the tree rooted at `root`.
    ///
    /// Each coordinate is built once; every parent listing it shares the same
    /// node, so the result is linear in the size of the file.
    pub fn to_tree(&self) -> Result<DependencyNode, ParseError> {
        fn go<'a>(
            coordinate: &'a Coordinate,
            children_of: &HashMap<&'a Coordinate, &'a [Coordinate]>,
            built: &mut HashMap<&'a Coordinate, Rc<DependencyNode>>,
            path: &mut Vec<&'a Coordinate>,
        ) -> Result<Rc<DependencyNode>, ParseError> {
            if let Some(node) = built.get(coordinate) {
                return Ok(Rc::clone(node));
            }
            if path.contains(&coordinate) {
                return Err(ParseError::Cycle(coordinate.clone()));
            }
            path.push(coordinate);
            let children = match children_of.get(coordinate) {
                Some(&children) => children
                    .iter()
                    .map(|child| go(child, children_of, built, path))
                    .collect::<Result<Vec<_>, _>>()?,
                None => Vec::new(),
            };
            path.pop();
            let node = Rc::new(DependencyNode::shared(coordinate.clone(), children));
            built.insert(coordinate, Rc::clone(&node));
            Ok(node)
        }

        let children_of = self.children_by_coordinate()?;
        let mut built = HashMap::new();
        let root = go(&self.root, &children_of, &mut built, &mut Vec::new())?;
        drop(built);
        Ok(Rc::try_unwrap(root).unwrap_or_else(|root| (*root).clone()))
    }

    fn children_by_coordinate(
        &self,
    ) -> Result<HashMap<&Coordinate, &[Coordinate]>, ParseError> {
        let mut children_of: HashMap<&Coordinate, &[Coordinate]> = HashMap::new();
        for entry in &self.dependencies {
            if children_of
                .insert(&entry.coordinate, &entry.dependencies)
                .is_some()
            {
                return Err(ParseError::DuplicateEntry(entry.coordinate.clone()));
            }
        }
        Ok(children_of)
    }
}

#[cfg(test)]
mod tests {
    use toml::toml;

    use super::*;

    use pretty_assertions::assert_eq;

    fn gav(s: &str) -> Coordinate {
        Coordinate::from_gav(s).unwrap()
    }

    #[test]
    fn load_save_graph_file() {
        let text = toml::to_string_pretty(&toml! {
            version = 1
            root = "com.example:app:1.0"

            [[dependencies]]
            coordinate = "com.example:app:1.0"
            dependencies = ["g:runtime:1.0", "xerces:xerces-impl:1.0"]

            [[dependencies]]
            coordinate = "xerces:xerces-impl:1.0"
            dependencies = ["xerces:xerces-api:1.0"]
        })
        .unwrap();
        let data = GraphFile {
            root: gav("com.example:app:1.0"),
            dependencies: vec![
                GraphEntry {
                    coordinate: gav("com.example:app:1.0"),
                    dependencies: vec![gav("g:runtime:1.0"), gav("xerces:xerces-impl:1.0")],
                },
                GraphEntry {
                    coordinate: gav("xerces:xerces-impl:1.0"),
                    dependencies: vec![gav("xerces:xerces-api:1.0")],
                },
            ],
        };
        let parsed = GraphFile::from_str(&text).unwrap();
        let formatted = data.to_string().unwrap();
        assert_eq!(parsed, data);
        assert_eq!(formatted, text);
    }

    #[test]
    fn materialize_tree() {
        let path = project_root::get_project_root()
            .unwrap()
            .join("resources/requiredeps.graph.toml");
        let graph = GraphFile::from_file(&path).unwrap();

        assert_eq!(
            graph.to_tree().unwrap(),
            DependencyNode::new(
                gav("com.example:app:1.0"),
                vec![
                    DependencyNode::new(
                        gav("g:runtime:1.0"),
                        vec![DependencyNode::leaf(gav("g:logging:2.1"))]
                    ),
                    DependencyNode::new(
                        gav("xerces:xerces-impl:1.0"),
                        vec![DependencyNode::leaf(gav("xerces:xerces-api:1.0"))]
                    ),
                    DependencyNode::leaf(gav("g:logging:2.1")),
                ]
            )
        );
        assert_eq!(
            graph.direct_dependencies(),
            vec![
                gav("g:runtime:1.0"),
                gav("xerces:xerces-impl:1.0"),
                gav("g:logging:2.1")
            ]
        );
    }

    #[test]
    fn root_without_entry_is_a_leaf() {
        let graph = GraphFile {
            root: gav("com.example:app:1.0"),
            dependencies: vec![],
        };
        assert_eq!(
            graph.to_tree().unwrap(),
            DependencyNode::leaf(gav("com.example:app:1.0"))
        );
        assert_eq!(graph.direct_dependencies(), vec![]);
    }

    #[test]
    fn reject_cycle() {
        let text = toml::to_string_pretty(&toml! {
            version = 1
            root = "a:a:1"

            [[dependencies]]
            coordinate = "a:a:1"
            dependencies = ["b:b:1"]

            [[dependencies]]
            coordinate = "b:b:1"
            dependencies = ["a:a:1"]
        })
        .unwrap();
        let graph = GraphFile::from_str(&text).unwrap();
        assert!(matches!(graph.to_tree(), Err(ParseError::Cycle(c)) if c == gav("a:a:1")));
    }

    #[test]
    fn shared_dependency_is_not_a_cycle() {
        let graph = GraphFile {
            root: gav("a:a:1"),
            dependencies: vec![
                GraphEntry {
                    coordinate: gav("a:a:1"),
                    dependencies: vec![gav("b:b:1"), gav("c:c:1")],
                },
                GraphEntry {
                    coordinate: gav("b:b:1"),
                    dependencies: vec![gav("c:c:1")],
                },
            ],
        };
        let tree = graph.to_tree().unwrap();
        assert_eq!(tree.children[0].children[0].coordinate, gav("c:c:1"));
        assert_eq!(tree.children[1].coordinate, gav("c:c:1"));
        assert!(Rc::ptr_eq(&tree.children[0].children[0], &tree.children[1]));
    }

    #[test]
    fn deep_diamond_is_built_once_per_coordinate() {
        let mut dependencies = vec![GraphEntry {
            coordinate: gav("root:root:1"),
            dependencies: vec![gav("a:a:0"), gav("b:b:0")],
        }];
        for depth in 0..19 {
            let next = vec![
                gav(&format!("a:a:{}", depth + 1)),
                gav(&format!("b:b:{}", depth + 1)),
            ];
            for side in ["a", "b"] {
                dependencies.push(GraphEntry {
                    coordinate: gav(&format!("{side}:{side}:{depth}")),
                    dependencies: next.clone(),
                });
            }
        }
        let graph = GraphFile {
            root: gav("root:root:1"),
            dependencies,
        };

        let tree = graph.to_tree().unwrap();

        let mut node = &tree;
        let mut depth = 0;
        while let [left, right] = node.children.as_slice() {
            assert_eq!(left.children.len(), right.children.len());
            for (l, r) in left.children.iter().zip(&right.children) {
                assert!(Rc::ptr_eq(l, r));
            }
            depth += 1;
            node = left.as_ref();
        }
        assert_eq!(depth, 20);
        assert_eq!(node.coordinate, gav("a:a:19"));
        assert!(node.children.is_empty());
    }

    #[test]
    fn reject_duplicate_entry() {
        let graph = GraphFile {
            root: gav("a:a:1"),
            dependencies: vec![
                GraphEntry {
                    coordinate: gav("a:a:1"),
                    dependencies: vec![],
                },
                GraphEntry {
                    coordinate: gav("a:a:1"),
                    dependencies: vec![gav("b:b:1")],
                },
            ],
        };
        assert!(matches!(graph.to_tree(), Err(ParseError::DuplicateEntry(_))));
    }

    #[test]
    fn reject_duplicate_entry_when_parsing() {
        let text = toml::to_string_pretty(&toml! {
            version = 1
            root = "com.example:app:1.0"

            [[dependencies]]
            coordinate = "com.example:app:1.0"
            dependencies = ["g:runtime:1.0"]

            [[dependencies]]
            coordinate = "com.example:app:1.0"
            dependencies = ["g:other:1.0"]
        })
        .unwrap();
        assert!(matches!(
            GraphFile::from_str(&text),
            Err(ParseError::DuplicateEntry(c)) if c == gav("com.example:app:1.0")
        ));
    }

    #[test]
    fn reject_unknown_version() {
        let text = toml::to_string_pretty(&toml! {
            version = 7
            root = "a:a:1"
        })
        .unwrap();
        assert!(matches!(
            GraphFile::from_str(&text),
            Err(ParseError::UnsupportedGraphVersion(_))
        ));
    }

    #[test]
    fn reject_missing_version() {
        let text = toml::to_string_pretty(&toml! {
            root = "a:a:1"
        })
        .unwrap();
        GraphFile::from_str(&text).expect_err("should not parse unversioned graph file");
    }

    #[test]
    fn reject_invalid_coordinate() {
        let text = toml::to_string_pretty(&toml! {
            version = 1
            root = "not-a-coordinate"
        })
        .unwrap();
        assert!(GraphFile::from_str(&text).is_err());
    }
}
