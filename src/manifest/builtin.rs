use super::FileStatus::{self, Pending, ToRefactor};

/// Target modules of the server decomposition: `(path, max_lines, status)`.
pub const BUILTIN_FILES: &[(&str, usize, FileStatus)] = &[
    ("src/server.py", 100, ToRefactor),
    // resources
    ("src/resources/__init__.py", 50, Pending),
    ("src/resources/base.py", 100, Pending),
    ("src/resources/project/__init__.py", 50, Pending),
    ("src/resources/project/list.py", 50, Pending),
    ("src/resources/project/get.py", 50, Pending),
    ("src/resources/project/create.py", 50, Pending),
    ("src/resources/project/update.py", 50, Pending),
    ("src/resources/item/__init__.py", 50, Pending),
    ("src/resources/item/add.py", 50, Pending),
    ("src/resources/item/remove.py", 50, Pending),
    ("src/resources/item/list.py", 50, Pending),
    ("src/resources/item/update.py", 50, Pending),
    ("src/resources/field/__init__.py", 50, Pending),
    ("src/resources/field/get.py", 50, Pending),
    ("src/resources/owner/__init__.py", 50, Pending),
    ("src/resources/owner/get_id.py", 50, Pending),
    // graphql documents
    ("src/graphql/__init__.py", 50, Pending),
    ("src/graphql/queries/list_projects.graphql", 50, Pending),
    ("src/graphql/queries/get_project_details.graphql", 100, Pending),
    ("src/graphql/queries/list_project_items.graphql", 100, Pending),
    ("src/graphql/queries/get_project_fields.graphql", 100, Pending),
    ("src/graphql/queries/get_owner_id.graphql", 50, Pending),
    ("src/graphql/mutations/create_project.graphql", 50, Pending),
    ("src/graphql/mutations/update_project.graphql", 50, Pending),
    ("src/graphql/mutations/add_item.graphql", 50, Pending),
    ("src/graphql/mutations/remove_item.graphql", 50, Pending),
    ("src/graphql/mutations/update_field.graphql", 50, Pending),
    // migrated infrastructure
    ("src/lib/__init__.py", 50, Pending),
    ("src/lib/graphql_client.py", 100, Pending),
    ("src/lib/auth.py", 50, Pending),
];

/// Files that move into `src/lib/`: `(path, replacement)`.
pub const BUILTIN_LEGACY: &[(&str, &str)] = &[
    ("src/graphql_client.py", "src/lib/"),
    ("src/auth.py", "src/lib/"),
];
