//! ASCII tree rendering for project hierarchies.

use crate::types::{Project, ProjectTreeNode};

const EDITOR: char = '✎';

/// Display label: the project name, or its id when unnamed.
fn label(project: &Project) -> &str {
    project.name().unwrap_or_else(|| project.id())
}

/// Render a project forest as ASCII art.
///
/// Editor-managed projects carry a `✎` marker.
///
/// Example output:
/// ```text
/// Research ✎
/// ├── Papers
/// │   ├── ✎ Drafts
/// │   └── Reviews
/// └── Datasets
/// ```
pub fn render_forest(nodes: &[ProjectTreeNode]) -> String {
    let mut output = String::new();
    for node in nodes {
        output.push_str(label(&node.project));
        if node.project.editor {
            output.push(' ');
            output.push(EDITOR);
        }
        output.push('\n');
        render_children(&mut output, &node.children, "");
    }
    output
}

fn render_children(output: &mut String, children: &[ProjectTreeNode], prefix: &str) {
    let Some((last, rest)) = children.split_last() else {
        return;
    };
    for child in rest {
        render_child(output, child, prefix, false);
    }
    render_child(output, last, prefix, true);
}

fn render_child(output: &mut String, node: &ProjectTreeNode, prefix: &str, is_last: bool) {
    let (branch, continuation) = if is_last {
        ("└── ", "    ")
    } else {
        ("├── ", "│   ")
    };
    let marker = if node.project.editor { "✎ " } else { "" };

    output.push_str(&format!("{prefix}{branch}{marker}{}\n", label(&node.project)));
    render_children(output, &node.children, &format!("{prefix}{continuation}"));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_node(project: Project, children: Vec<ProjectTreeNode>) -> ProjectTreeNode {
        ProjectTreeNode { project, children }
    }

    #[test]
    fn test_single_root() {
        let tree = vec![make_node(Project::new("p1").with_name("Research"), vec![])];
        assert_eq!(render_forest(&tree), "Research\n");
    }

    #[test]
    fn test_unnamed_project_uses_id() {
        let tree = vec![make_node(Project::new("p1"), vec![])];
        assert_eq!(render_forest(&tree), "p1\n");
    }

    #[test]
    fn test_multiple_roots() {
        let tree = vec![
            make_node(Project::new("a"), vec![]),
            make_node(Project::new("b").with_editor(true), vec![]),
        ];
        assert_eq!(render_forest(&tree), "a\nb ✎\n");
    }

    #[test]
    fn test_nested_children() {
        let tree = vec![make_node(
            Project::new("p1").with_name("Research").with_editor(true),
            vec![
                make_node(
                    Project::new("p2").with_name("Papers"),
                    vec![
                        make_node(Project::new("p3").with_name("Drafts").with_editor(true), vec![]),
                        make_node(Project::new("p4").with_name("Reviews"), vec![]),
                    ],
                ),
                make_node(Project::new("p5").with_name("Datasets"), vec![]),
            ],
        )];
        let expected = "Research ✎\n├── Papers\n│   ├── ✎ Drafts\n│   └── Reviews\n└── Datasets\n";
        assert_eq!(render_forest(&tree), expected);
    }

    #[test]
    fn test_last_branch_continuation_is_blank() {
        let tree = vec![make_node(
            Project::new("a"),
            vec![make_node(
                Project::new("b"),
                vec![make_node(Project::new("c").with_editor(true), vec![])],
            )],
        )];
        assert_eq!(render_forest(&tree), "a\n└── b\n    └── ✎ c\n");
    }
}
