//! Two-way converter between the editor's tree-shaped project model and the
//! flat VFS. Stateless - called once at session start (import) and after
//! every mutating command (export).

use serde::{Deserialize, Serialize};

use crate::path;
use crate::vfs::{FileEntry, VfsError, VirtualFileSystem};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    File,
    Folder,
}

/// One node of the editor's project tree, shaped like the JSON the editor
/// keeps: `{ name, path, type, content?, mimeType?, children }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectNode {
    pub name: String,
    pub path: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ProjectNode>,
}

impl ProjectNode {
    pub fn folder(path: &str, children: Vec<ProjectNode>) -> Self {
        Self {
            name: path::basename(path).to_string(),
            path: path.to_string(),
            kind: NodeKind::Folder,
            content: None,
            mime_type: None,
            children,
        }
    }

    pub fn file(path: &str, content: &str) -> Self {
        Self {
            name: path::basename(path).to_string(),
            path: path.to_string(),
            kind: NodeKind::File,
            content: Some(content.to_string()),
            mime_type: guess_mime(path),
            children: Vec::new(),
        }
    }
}

/// Depth-first walk of the editor tree into a fresh flat filesystem.
/// Ancestors are created as encountered, so the no-orphans invariant holds
/// whatever order the editor hands nodes over in.
pub fn import_tree(nodes: &[ProjectNode]) -> Result<VirtualFileSystem, VfsError> {
    let mut vfs = VirtualFileSystem::new();
    import_into(&mut vfs, nodes)?;
    Ok(vfs)
}

fn import_into(vfs: &mut VirtualFileSystem, nodes: &[ProjectNode]) -> Result<(), VfsError> {
    for node in nodes {
        // editor paths aren't guaranteed canonical; fix them up here
        let p = path::resolve(&node.path, "/");
        match node.kind {
            NodeKind::Folder => {
                vfs.create_dir_all(&p)?;
                import_into(vfs, &node.children)?;
            }
            NodeKind::File => {
                let parent = path::parent(&p);
                vfs.create_dir_all(&parent)?;
                vfs.write_file(
                    &p,
                    FileEntry::new(
                        node.content.clone().unwrap_or_default(),
                        node.mime_type.clone(),
                    ),
                )?;
            }
        }
    }
    Ok(())
}

/// Inverse walk: rebuild the editor tree from the flat maps. Folders come
/// before files at each level, both alphabetical, so the output is stable.
pub fn export_tree(vfs: &VirtualFileSystem) -> Vec<ProjectNode> {
    export_dir(vfs, "/")
}

fn export_dir(vfs: &VirtualFileSystem, dir: &str) -> Vec<ProjectNode> {
    let (dirs, files) = vfs.list_children(dir);
    let mut nodes = Vec::with_capacity(dirs.len() + files.len());
    for name in dirs {
        let child_path = path::join(dir, &name);
        nodes.push(ProjectNode::folder(&child_path, export_dir(vfs, &child_path)));
    }
    for name in files {
        let child_path = path::join(dir, &name);
        let entry = match vfs.read_file(&child_path) {
            Ok(e) => e,
            Err(_) => continue,
        };
        let mut node = ProjectNode::file(&child_path, &entry.content);
        if entry.mime_type.is_some() {
            node.mime_type = entry.mime_type.clone();
        }
        nodes.push(node);
    }
    nodes
}

/// Rough mime guess from the extension, enough for the editor to pick a
/// syntax mode for files born in the terminal.
pub fn guess_mime(p: &str) -> Option<String> {
    let ext = p.rsplit('.').next()?;
    let mime = match ext {
        "js" | "mjs" | "jsx" => "text/javascript",
        "ts" | "tsx" => "text/typescript",
        "html" | "htm" => "text/html",
        "css" => "text/css",
        "json" => "application/json",
        "md" => "text/markdown",
        "txt" => "text/plain",
        _ => return None,
    };
    Some(mime.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> Vec<ProjectNode> {
        vec![
            ProjectNode::folder(
                "/src",
                vec![
                    ProjectNode::file("/src/index.js", "console.log('hi');\n"),
                    ProjectNode::folder(
                        "/src/components",
                        vec![ProjectNode::file("/src/components/app.js", "export {};\n")],
                    ),
                ],
            ),
            ProjectNode::file("/package.json", "{}\n"),
        ]
    }

    #[test]
    fn test_import_builds_flat_maps() {
        let vfs = import_tree(&sample_tree()).unwrap();
        assert!(vfs.is_directory("/src"));
        assert!(vfs.is_directory("/src/components"));
        assert!(vfs.is_file("/src/index.js"));
        assert!(vfs.is_file("/src/components/app.js"));
        assert!(vfs.is_file("/package.json"));
        assert_eq!(vfs.read_file("/package.json").unwrap().content, "{}\n");
    }

    #[test]
    fn test_import_creates_missing_ancestors() {
        // a lone deep file node still gets its ancestor directories
        let tree = vec![ProjectNode::file("/a/b/c.txt", "x")];
        let vfs = import_tree(&tree).unwrap();
        assert!(vfs.is_directory("/a"));
        assert!(vfs.is_directory("/a/b"));
        assert!(vfs.is_file("/a/b/c.txt"));
    }

    #[test]
    fn test_export_orders_folders_first() {
        let vfs = import_tree(&sample_tree()).unwrap();
        let tree = export_tree(&vfs);
        assert_eq!(tree[0].path, "/src");
        assert_eq!(tree[0].kind, NodeKind::Folder);
        assert_eq!(tree[1].path, "/package.json");
        let src_children: Vec<&str> = tree[0].children.iter().map(|n| n.path.as_str()).collect();
        assert_eq!(src_children, vec!["/src/components", "/src/index.js"]);
    }

    #[test]
    fn test_round_trip_is_fixpoint() {
        let once = export_tree(&import_tree(&sample_tree()).unwrap());
        let twice = export_tree(&import_tree(&once).unwrap());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_round_trip_preserves_content_and_mime() {
        let mut file = ProjectNode::file("/style.css", "body{}\n");
        file.mime_type = Some("text/css".to_string());
        let tree = vec![file];
        let out = export_tree(&import_tree(&tree).unwrap());
        assert_eq!(out[0].content.as_deref(), Some("body{}\n"));
        assert_eq!(out[0].mime_type.as_deref(), Some("text/css"));
    }

    #[test]
    fn test_json_shape_matches_editor_model() {
        let node = ProjectNode::file("/src/a.js", "x");
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["type"], "file");
        assert_eq!(json["mimeType"], "text/javascript");
        assert_eq!(json["path"], "/src/a.js");
        // folders serialize children, files omit the empty vec
        assert!(json.get("children").is_none());
    }
}
