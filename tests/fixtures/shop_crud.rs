// @generated by crud-generate from "shop.sqlite3". Do not edit by hand.

pub const DATABASE_PATH: &str = "shop.sqlite3";

pub fn open_connection() -> rusqlite::Result<rusqlite::Connection> {
    rusqlite::Connection::open(DATABASE_PATH)
}

#[doc = " Columns of table `users`."]
#[allow(non_camel_case_types)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UsersColumn {
    #[doc = " `id`: INTEGER PRIMARY KEY"]
    Id,
    #[doc = " `name`: TEXT NOT NULL"]
    Name,
    #[doc = " `email`: TEXT"]
    Email
}

impl UsersColumn {
    pub const fn as_sql(self) -> &'static str {
        match self {
            Self::Id => "\"id\"",
            Self::Name => "\"name\"",
            Self::Email => "\"email\""
        }
    }
}

#[doc = " CRUD operations on table `users`."]
#[allow(non_camel_case_types)]
pub struct UsersCrud<'a> {
    conn: &'a rusqlite::Connection,
}

impl<'a> UsersCrud<'a> {
    pub fn new(conn: &'a rusqlite::Connection) -> Self {
        Self { conn }
    }

    pub fn create(&self, id: &dyn rusqlite::ToSql, name: &dyn rusqlite::ToSql, email: &dyn rusqlite::ToSql) -> rusqlite::Result<usize> {
        self.conn.execute(
            "INSERT INTO \"users\" (\"id\", \"name\", \"email\") VALUES (?, ?, ?)",
            rusqlite::params![id, name, email]
        )
    }

    pub fn read(
        &self,
        filters: &[(UsersColumn, &dyn rusqlite::ToSql)],
    ) -> rusqlite::Result<Vec<Vec<rusqlite::types::Value>>> {
        let mut sql = String::from("SELECT * FROM \"users\"");
        if !filters.is_empty() {
            let clauses: Vec<String> = filters
                .iter()
                .map(|(column, _)| format!("{} = ?", column.as_sql()))
                .collect();
            sql.push_str(" WHERE ");
            sql.push_str(&clauses.join(" AND "));
        }
        let values: Vec<&dyn rusqlite::ToSql> = filters.iter().map(|(_, value)| *value).collect();

        let mut statement = self.conn.prepare(&sql)?;
        let width = statement.column_count();
        let rows = statement.query_map(values.as_slice(), |row| {
            (0..width)
                .map(|index| row.get::<_, rusqlite::types::Value>(index))
                .collect::<rusqlite::Result<Vec<_>>>()
        })?;
        rows.collect::<rusqlite::Result<Vec<_>>>()
    }

    pub fn update(
        &self,
        id: &dyn rusqlite::ToSql,
        updates: &[(UsersColumn, &dyn rusqlite::ToSql)],
    ) -> rusqlite::Result<usize> {
        if updates.is_empty() {
            return Ok(0);
        }
        let assignments: Vec<String> = updates
            .iter()
            .map(|(column, _)| format!("{} = ?", column.as_sql()))
            .collect();
        let mut sql = String::from("UPDATE \"users\" SET ");
        sql.push_str(&assignments.join(", "));
        sql.push_str(" WHERE \"id\" = ?");

        let mut values: Vec<&dyn rusqlite::ToSql> = updates.iter().map(|(_, value)| *value).collect();
        values.push(id);
        self.conn.execute(&sql, values.as_slice())
    }

    pub fn delete(&self, id: &dyn rusqlite::ToSql) -> rusqlite::Result<usize> {
        self.conn.execute("DELETE FROM \"users\" WHERE \"id\" = ?", rusqlite::params![id])
    }
}

#[doc = " Columns of table `orders`."]
#[allow(non_camel_case_types)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrdersColumn {
    #[doc = " `order_id`: INTEGER PRIMARY KEY"]
    OrderId,
    #[doc = " `user_id`: INTEGER"]
    UserId,
    #[doc = " `total`: REAL"]
    Total
}

impl OrdersColumn {
    pub const fn as_sql(self) -> &'static str {
        match self {
            Self::OrderId => "\"order_id\"",
            Self::UserId => "\"user_id\"",
            Self::Total => "\"total\""
        }
    }
}

#[doc = " CRUD operations on table `orders`."]
#[allow(non_camel_case_types)]
pub struct OrdersCrud<'a> {
    conn: &'a rusqlite::Connection,
}

impl<'a> OrdersCrud<'a> {
    pub fn new(conn: &'a rusqlite::Connection) -> Self {
        Self { conn }
    }

    pub fn create(&self, order_id: &dyn rusqlite::ToSql, user_id: &dyn rusqlite::ToSql, total: &dyn rusqlite::ToSql) -> rusqlite::Result<usize> {
        self.conn.execute(
            "INSERT INTO \"orders\" (\"order_id\", \"user_id\", \"total\") VALUES (?, ?, ?)",
            rusqlite::params![order_id, user_id, total]
        )
    }

    pub fn read(
        &self,
        filters: &[(OrdersColumn, &dyn rusqlite::ToSql)],
    ) -> rusqlite::Result<Vec<Vec<rusqlite::types::Value>>> {
        let mut sql = String::from("SELECT * FROM \"orders\"");
        if !filters.is_empty() {
            let clauses: Vec<String> = filters
                .iter()
                .map(|(column, _)| format!("{} = ?", column.as_sql()))
                .collect();
            sql.push_str(" WHERE ");
            sql.push_str(&clauses.join(" AND "));
        }
        let values: Vec<&dyn rusqlite::ToSql> = filters.iter().map(|(_, value)| *value).collect();

        let mut statement = self.conn.prepare(&sql)?;
        let width = statement.column_count();
        let rows = statement.query_map(values.as_slice(), |row| {
            (0..width)
                .map(|index| row.get::<_, rusqlite::types::Value>(index))
                .collect::<rusqlite::Result<Vec<_>>>()
        })?;
        rows.collect::<rusqlite::Result<Vec<_>>>()
    }

    pub fn update(
        &self,
        id: &dyn rusqlite::ToSql,
        updates: &[(OrdersColumn, &dyn rusqlite::ToSql)],
    ) -> rusqlite::Result<usize> {
        if updates.is_empty() {
            return Ok(0);
        }
        let assignments: Vec<String> = updates
            .iter()
            .map(|(column, _)| format!("{} = ?", column.as_sql()))
            .collect();
        let mut sql = String::from("UPDATE \"orders\" SET ");
        sql.push_str(&assignments.join(", "));
        sql.push_str(" WHERE \"order_id\" = ?");

        let mut values: Vec<&dyn rusqlite::ToSql> = updates.iter().map(|(_, value)| *value).collect();
        values.push(id);
        self.conn.execute(&sql, values.as_slice())
    }

    pub fn delete(&self, id: &dyn rusqlite::ToSql) -> rusqlite::Result<usize> {
        self.conn.execute("DELETE FROM \"orders\" WHERE \"order_id\" = ?", rusqlite::params![id])
    }
}

#[doc = " Columns of table `order items`."]
#[allow(non_camel_case_types)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Order_itemsColumn {
    #[doc = " `order`: INTEGER"]
    Order,
    #[doc = " `sku`: TEXT"]
    Sku,
    #[doc = " `type`: TEXT"]
    Type
}

impl Order_itemsColumn {
    pub const fn as_sql(self) -> &'static str {
        match self {
            Self::Order => "\"order\"",
            Self::Sku => "\"sku\"",
            Self::Type => "\"type\""
        }
    }
}

#[doc = " CRUD operations on table `order items`."]
#[allow(non_camel_case_types)]
pub struct Order_itemsCrud<'a> {
    conn: &'a rusqlite::Connection,
}

impl<'a> Order_itemsCrud<'a> {
    pub fn new(conn: &'a rusqlite::Connection) -> Self {
        Self { conn }
    }

    pub fn create(&self, order: &dyn rusqlite::ToSql, sku: &dyn rusqlite::ToSql, type_: &dyn rusqlite::ToSql) -> rusqlite::Result<usize> {
        self.conn.execute(
            "INSERT INTO \"order items\" (\"order\", \"sku\", \"type\") VALUES (?, ?, ?)",
            rusqlite::params![order, sku, type_]
        )
    }

    pub fn read(
        &self,
        filters: &[(Order_itemsColumn, &dyn rusqlite::ToSql)],
    ) -> rusqlite::Result<Vec<Vec<rusqlite::types::Value>>> {
        let mut sql = String::from("SELECT * FROM \"order items\"");
        if !filters.is_empty() {
            let clauses: Vec<String> = filters
                .iter()
                .map(|(column, _)| format!("{} = ?", column.as_sql()))
                .collect();
            sql.push_str(" WHERE ");
            sql.push_str(&clauses.join(" AND "));
        }
        let values: Vec<&dyn rusqlite::ToSql> = filters.iter().map(|(_, value)| *value).collect();

        let mut statement = self.conn.prepare(&sql)?;
        let width = statement.column_count();
        let rows = statement.query_map(values.as_slice(), |row| {
            (0..width)
                .map(|index| row.get::<_, rusqlite::types::Value>(index))
                .collect::<rusqlite::Result<Vec<_>>>()
        })?;
        rows.collect::<rusqlite::Result<Vec<_>>>()
    }

    pub fn update(
        &self,
        id: &dyn rusqlite::ToSql,
        updates: &[(Order_itemsColumn, &dyn rusqlite::ToSql)],
    ) -> rusqlite::Result<usize> {
        if updates.is_empty() {
            return Ok(0);
        }
        let assignments: Vec<String> = updates
            .iter()
            .map(|(column, _)| format!("{} = ?", column.as_sql()))
            .collect();
        let mut sql = String::from("UPDATE \"order items\" SET ");
        sql.push_str(&assignments.join(", "));
        sql.push_str(" WHERE \"order\" = ?");

        let mut values: Vec<&dyn rusqlite::ToSql> = updates.iter().map(|(_, value)| *value).collect();
        values.push(id);
        self.conn.execute(&sql, values.as_slice())
    }

    pub fn delete(&self, id: &dyn rusqlite::ToSql) -> rusqlite::Result<usize> {
        self.conn.execute("DELETE FROM \"order items\" WHERE \"order\" = ?", rusqlite::params![id])
    }
}

pub fn close_connection(conn: rusqlite::Connection) -> rusqlite::Result<()> {
    conn.close().map_err(|(_, error)| error)
}
