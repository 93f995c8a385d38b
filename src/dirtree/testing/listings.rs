//! Listing fixtures for unit tests

/// Two blocks: `C:\Data` with a file and a folder, `C:\Data\Sub` with one file
pub const DATA_WITH_SUB: &str = "
    Directory: C:\\Data


Mode                 LastWriteTime         Length Name
----                 -------------         ------ ----
-a---           1/2/2017     09:30            120 notes.txt
d----           1/2/2017     09:00                Sub


    Directory: C:\\Data\\Sub


Mode                 LastWriteTime         Length Name
----                 -------------         ------ ----
-a---           1/2/2017     10:00           4096 report.docx


";

/// A single directory with no entries
pub const EMPTY_ROOT: &str = "
    Directory: C:\\Empty


Mode                 LastWriteTime         Length Name
----                 -------------         ------ ----


";

/// The same tree as [`DATA_WITH_SUB`], with the second path too long for the title line
pub const LONG_PATH_HEADER: &str = "
    Directory: C:\\Data


Mode                 LastWriteTime         Length Name
----                 -------------         ------ ----
-a---           1/2/2017     09:30            120 notes.txt
d----           1/2/2017     09:00                Sub


    Directory:
C:\\Data\\Sub


Mode                 LastWriteTime         Length Name
----                 -------------         ------ ----
-a---           1/2/2017     10:00           4096 report.docx


";
