use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use super::Project;

/// A project with its child projects nested beneath it.
///
/// The project's fields are flattened into the JSON object, with an
/// additional `children` array of nested nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectTreeNode {
    #[serde(flatten)]
    pub project: Project,
    #[serde(default)]
    pub children: Vec<ProjectTreeNode>,
}

impl ProjectTreeNode {
    /// Number of projects in this subtree, including this one.
    pub fn project_count(&self) -> usize {
        1 + self.children.iter().map(ProjectTreeNode::project_count).sum::<usize>()
    }
}

/// Group projects into a forest using their `parent_id` links.
///
/// Roots are projects without a parent, or whose parent is not in `projects`.
/// Siblings keep their input order. Projects only reachable through a parent
/// cycle have no root and are left out.
pub fn build_forest(projects: &[Project]) -> Vec<ProjectTreeNode> {
    let known: HashSet<&str> = projects.iter().map(Project::id).collect();

    let mut children_map: HashMap<Option<&str>, Vec<&Project>> = HashMap::new();
    for project in projects {
        let parent = project
            .parent_id
            .as_deref()
            .filter(|parent| !parent.is_empty() && known.contains(parent));
        children_map.entry(parent).or_default().push(project);
    }

    fn build_subtree<'a>(
        parent_id: Option<&'a str>,
        children_map: &HashMap<Option<&'a str>, Vec<&'a Project>>,
        ancestors: &mut Vec<&'a str>,
    ) -> Vec<ProjectTreeNode> {
        let Some(projects) = children_map.get(&parent_id) else {
            return Vec::new();
        };

        let mut nodes = Vec::with_capacity(projects.len());
        for &project in projects {
            // Duplicate ids can loop back onto an ancestor.
            if ancestors.contains(&project.id()) {
                continue;
            }
            ancestors.push(project.id());
            let children = build_subtree(Some(project.id()), children_map, ancestors);
            ancestors.pop();

            nodes.push(ProjectTreeNode {
                project: project.clone(),
                children,
            });
        }
        nodes
    }

    let forest = build_subtree(None, &children_map, &mut Vec::new());

    let placed: usize = forest.iter().map(ProjectTreeNode::project_count).sum();
    let dropped = projects.len().saturating_sub(placed);
    if dropped > 0 {
        tracing::warn!(dropped, "projects with cyclic parent references left out of tree");
    }

    forest
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(nodes: &[ProjectTreeNode]) -> Vec<&str> {
        nodes.iter().map(|n| n.project.id()).collect()
    }

    #[test]
    fn test_empty_input() {
        assert!(build_forest(&[]).is_empty());
    }

    #[test]
    fn test_nests_children_under_parents() {
        let projects = vec![
            Project::new("root"),
            Project::new("child").with_parent_id("root"),
            Project::new("grandchild").with_parent_id("child"),
        ];

        let forest = build_forest(&projects);
        assert_eq!(ids(&forest), vec!["root"]);
        assert_eq!(ids(&forest[0].children), vec!["child"]);
        assert_eq!(ids(&forest[0].children[0].children), vec!["grandchild"]);
        assert_eq!(forest[0].project_count(), 3);
    }

    #[test]
    fn test_children_listed_before_parent() {
        let projects = vec![
            Project::new("b").with_parent_id("a"),
            Project::new("a"),
        ];

        let forest = build_forest(&projects);
        assert_eq!(ids(&forest), vec!["a"]);
        assert_eq!(ids(&forest[0].children), vec!["b"]);
    }

    #[test]
    fn test_empty_parent_is_root_even_with_unnamed_project() {
        let projects = vec![Project::default(), Project::new("a").with_parent_id("")];

        let forest = build_forest(&projects);
        assert_eq!(ids(&forest), vec!["", "a"]);
        assert!(forest[0].children.is_empty());
    }

    #[test]
    fn test_duplicate_self_parent_does_not_recurse() {
        let projects = vec![Project::new("a"), Project::new("a").with_parent_id("a")];

        let forest = build_forest(&projects);
        assert_eq!(ids(&forest), vec!["a"]);
        assert!(forest[0].children.is_empty());
    }
}
