mod university;
